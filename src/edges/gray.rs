//! Greyscale reduction of the decoded input image.
use crate::image::ImageF32;
use image::DynamicImage;

/// Collapse a decoded image to single-channel intensities on the 0..255
/// scale. Multi-channel inputs go through the standard luma conversion;
/// already-grey inputs pass through unchanged.
pub fn to_grayscale(img: &DynamicImage) -> ImageF32 {
    let luma = img.to_luma8();
    let w = luma.width() as usize;
    let h = luma.height() as usize;
    let mut out = ImageF32::new(w, h);
    for (dst, &src) in out.data.iter_mut().zip(luma.as_raw().iter()) {
        *dst = f32::from(src);
    }
    out
}
