//! Hysteresis thresholding of the suppressed magnitude grid.
//!
//! Pixels at or above the high threshold are definite edges and seed a
//! stack-based flood over their 8-neighborhoods; pixels at or above the
//! low threshold are kept only when reached from a seed. Everything else
//! is suppressed. Output pixels are 0 or 255.
use crate::image::{ImageF32, ImageU8};

const EDGE: u8 = 255;

/// Link weak responses to strong ones and emit the binary edge map.
pub fn link_edges(thinned: &ImageF32, low: f32, high: f32) -> ImageU8 {
    let w = thinned.w;
    let h = thinned.h;
    let n = w * h;
    let mut out = ImageU8::new(w, h);
    if n == 0 {
        return out;
    }

    let (low, high) = if high < low { (high, low) } else { (low, high) };

    let mut weak = vec![0u8; n];
    let mut visited = vec![0u8; n];
    let mut stack = Vec::new();

    for (idx, &v) in thinned.data.iter().enumerate() {
        if v >= low {
            weak[idx] = 1;
        }
        if v >= high {
            visited[idx] = 1;
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        out.data[idx] = EDGE;

        let x = idx % w;
        let y = idx / w;
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let nidx = ny * w + nx;
                if visited[nidx] == 0 && weak[nidx] != 0 {
                    visited[nidx] = 1;
                    stack.push(nidx);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: usize, h: usize, values: &[(usize, usize, f32)]) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for &(x, y, v) in values {
            img.set(x, y, v);
        }
        img
    }

    #[test]
    fn strong_pixels_become_edges() {
        let thinned = grid(5, 5, &[(2, 2, 250.0)]);
        let edges = link_edges(&thinned, 100.0, 200.0);
        assert_eq!(edges.get(2, 2), 255);
        assert_eq!(edges.count_nonzero(), 1);
    }

    #[test]
    fn weak_pixel_kept_only_when_connected() {
        // Weak chain attached to a strong seed survives end to end.
        let connected = grid(7, 3, &[(1, 1, 250.0), (2, 1, 120.0), (3, 1, 120.0)]);
        let edges = link_edges(&connected, 100.0, 200.0);
        assert_eq!(edges.get(3, 1), 255);

        // The same chain without the seed is suppressed entirely.
        let isolated = grid(7, 3, &[(2, 1, 120.0), (3, 1, 120.0)]);
        let edges = link_edges(&isolated, 100.0, 200.0);
        assert_eq!(edges.count_nonzero(), 0);
    }

    #[test]
    fn below_low_is_always_suppressed() {
        let thinned = grid(3, 3, &[(1, 1, 99.9)]);
        let edges = link_edges(&thinned, 100.0, 200.0);
        assert_eq!(edges.count_nonzero(), 0);
    }

    #[test]
    fn swapped_thresholds_are_reordered() {
        let thinned = grid(3, 3, &[(1, 1, 250.0)]);
        let edges = link_edges(&thinned, 200.0, 100.0);
        assert_eq!(edges.get(1, 1), 255);
    }
}
