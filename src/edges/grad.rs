//! Image gradients (3×3 Sobel) with L1 magnitude.
//!
//! - Convolves the Sobel kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy`, `mag = |gx| + |gy|`.
//!
//! The L1 magnitude keeps responses on the same scale the fixed hysteresis
//! thresholds were chosen for.
use crate::image::ImageF32;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// L1 magnitude per pixel: `|gx| + |gy|`
    pub mag: ImageF32,
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x_idx[0]] * kx_row[0]
                    + row[x_idx[1]] * kx_row[1]
                    + row[x_idx[2]] * kx_row[2];
                sum_y += row[x_idx[0]] * ky_row[0]
                    + row[x_idx[1]] * ky_row[1]
                    + row[x_idx[2]] * ky_row[2];
            }

            let i = y * w + x;
            gx.data[i] = sum_x;
            gy.data[i] = sum_y;
            mag.data[i] = sum_x.abs() + sum_y.abs();
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: usize, h: usize, at: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in at..w {
                img.set(x, y, 255.0);
            }
        }
        img
    }

    #[test]
    fn flat_image_has_zero_magnitude() {
        let img = ImageF32::new(8, 8);
        let grad = sobel_gradients(&img);
        assert!(grad.mag.data.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn vertical_step_responds_in_x() {
        let img = vertical_step(16, 8, 8);
        let grad = sobel_gradients(&img);
        // Strongest response sits on the two columns flanking the step.
        assert_eq!(grad.mag.get(7, 4), 4.0 * 255.0);
        assert_eq!(grad.mag.get(8, 4), 4.0 * 255.0);
        assert_eq!(grad.mag.get(3, 4), 0.0);
        assert_eq!(grad.gy.get(7, 4), 0.0);
    }
}
