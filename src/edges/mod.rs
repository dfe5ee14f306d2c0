//! Edge detection: greyscale reduction, Sobel gradients, non-maximum
//! suppression and hysteresis thresholding.
//!
//! The stages are split into small building blocks:
//!
//! - Greyscale reduction of the decoded input (`gray`).
//! - 3×3 Sobel gradients with border clamping and L1 magnitude (`grad`).
//! - Direction-aligned NMS producing a thinned magnitude grid (`nms`).
//! - Stack-based hysteresis linking producing the binary edge map
//!   (`hysteresis`).
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - No blur/denoise stage: the detector runs on the raw intensities.

pub mod grad;
pub mod gray;
pub mod hysteresis;
pub mod nms;

pub use grad::{sobel_gradients, Grad};
pub use gray::to_grayscale;

use crate::image::ImageU8;
use image::DynamicImage;
use log::debug;
use serde::Deserialize;

/// Hysteresis thresholds applied to the suppressed L1 gradient magnitude.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Pixels at or above this magnitude survive only next to a definite edge.
    pub low_threshold: f32,
    /// Pixels at or above this magnitude are definite edges.
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
        }
    }
}

/// Reduce `img` to greyscale and extract a binary edge map (0 / 255).
///
/// Output dimensions equal the greyscale reduction of the input.
pub fn detect(img: &DynamicImage, params: &EdgeParams) -> ImageU8 {
    let gray = to_grayscale(img);
    let grad = sobel_gradients(&gray);
    let thinned = nms::suppress(&grad);
    let edges = hysteresis::link_edges(&thinned, params.low_threshold, params.high_threshold);
    debug!(
        "edges::detect w={} h={} edge_pixels={}",
        edges.w,
        edges.h,
        edges.count_nonzero()
    );
    edges
}
