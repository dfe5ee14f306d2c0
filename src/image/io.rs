//! Decode/encode helpers around the `image` crate.
//!
//! - `load_image`: read any supported raster file into a `DynamicImage`.
//! - `save_gray_u8`: write an `ImageU8` to disk; the encoder is chosen
//!   from the target path's extension, so the persisted edge map keeps the
//!   input file's format.
use super::ImageU8;
use crate::error::Error;
use image::{DynamicImage, ImageBuffer, Luma};
use std::path::Path;

/// Decode an image file. Failure is the batch-fatal error kind.
pub fn load_image(path: &Path) -> Result<DynamicImage, Error> {
    image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an 8-bit single-channel buffer to `path`.
pub fn save_gray_u8(img: &ImageU8, path: &Path) -> Result<(), Error> {
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone()).ok_or_else(|| {
            Error::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "buffer size does not match dimensions",
                ),
            }
        })?;
    DynamicImage::ImageLuma8(buffer)
        .save(path)
        .map_err(|source| Error::WriteImage {
            path: path.to_path_buf(),
            source,
        })
}
