//! Contour tracing: binary edge map → ordered boundary polylines.
//!
//! - Binarization at a fixed intensity threshold (`> threshold` is "on").
//! - 8-connected components discovered in row-major scan order.
//! - Only the external boundary of each component is traced (nested
//!   holes are ignored), via Moore neighbor tracing (`tracer`).
//! - Boundaries are compressed by collapsing collinear runs (`approx`).
//!
//! Contour order follows discovery order and is stable for one run, but
//! carries no meaning across runs or inputs.

pub mod approx;
pub mod tracer;

pub use approx::compress_collinear;

use crate::image::ImageU8;
use crate::types::Contour;
use log::debug;
use serde::Deserialize;

/// Tracer knobs.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TraceParams {
    /// Intensity strictly above this value counts as "on".
    pub binarize_threshold: u8,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            binarize_threshold: 40,
        }
    }
}

/// Traced contours plus the edge map's pixel dimensions, which the
/// emitters need for their headers.
#[derive(Clone, Debug)]
pub struct TraceResult {
    pub width: usize,
    pub height: usize,
    pub contours: Vec<Contour>,
}

impl TraceResult {
    /// Total number of points across all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }
}

/// Extract the external boundary of every connected "on" region.
pub fn trace(edge_map: &ImageU8, params: &TraceParams) -> TraceResult {
    let contours = tracer::external_contours(edge_map, params.binarize_threshold);
    debug!(
        "contours::trace w={} h={} contours={}",
        edge_map.w,
        edge_map.h,
        contours.len()
    );
    TraceResult {
        width: edge_map.w,
        height: edge_map.h,
        contours,
    }
}
