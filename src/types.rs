//! Shared geometry vocabulary: integer pixel points and traced contours.

/// A pixel-space coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One traced boundary: an ordered polyline in pixel space.
///
/// Not guaranteed closed, non-self-intersecting, or connected to any other
/// contour. Contour order inside a set is the tracer's discovery order and
/// is stable for one run.
pub type Contour = Vec<Point>;
