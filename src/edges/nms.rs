//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the gradient direction is quantized into one of four
//! sectors (0°, 45°, 90°, 135°) to pick the two comparison neighbors; a
//! pixel survives when its magnitude is at least as large as both. The
//! `>=` comparison keeps two-pixel plateaus that ideal step edges produce.
//!
//! The outermost 1-pixel frame is ignored to avoid out-of-bounds checks in
//! neighbor lookup.
use super::grad::Grad;
use crate::image::ImageF32;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin the gradient magnitude grid, zeroing non-maximal pixels.
pub fn suppress(grad: &Grad) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag >= neighbor1 && mag >= neighbor2 {
                out.set(x, y, mag);
            }
        }
    }

    out
}
