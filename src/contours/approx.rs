//! Linear approximation of traced boundaries.
//!
//! Boundary walks step between adjacent pixels, so straight stretches show
//! up as runs of identical step directions. Dropping the interior points
//! of each run keeps the polyline geometry while shrinking the point count
//! well below a pixel-perfect trace. Endpoints and every direction change
//! are preserved.
use crate::types::{Contour, Point};

/// Collapse maximal collinear runs. Contours with fewer than three points
/// are returned unchanged.
pub fn compress_collinear(points: &[Point]) -> Contour {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);

    for i in 1..points.len() - 1 {
        let incoming = step_direction(points[i - 1], points[i]);
        let outgoing = step_direction(points[i], points[i + 1]);
        if incoming != outgoing {
            out.push(points[i]);
        }
    }

    out.push(points[points.len() - 1]);
    out
}

#[inline]
fn step_direction(from: Point, to: Point) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}
