use image::{Rgb, RgbImage};
use matsim_netgen::image::ImageU8;

/// All-black color image.
pub fn black_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([0, 0, 0]))
}

/// Black color image with one white axis-aligned square.
pub fn bright_square_rgb(width: u32, height: u32, x0: u32, y0: u32, size: u32) -> RgbImage {
    let mut img = black_rgb(width, height);
    for y in y0..(y0 + size).min(height) {
        for x in x0..(x0 + size).min(width) {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    img
}

/// Binary edge map with a filled rectangular "on" region.
pub fn edge_map_with_rect(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    rw: usize,
    rh: usize,
) -> ImageU8 {
    let mut map = ImageU8::new(width, height);
    for y in y0..(y0 + rh).min(height) {
        for x in x0..(x0 + rw).min(width) {
            map.set(x, y, 255);
        }
    }
    map
}
