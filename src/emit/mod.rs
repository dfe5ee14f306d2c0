//! Serializers consuming the traced contour set.
//!
//! The three emitters are mutually independent: each renders its document
//! from the same contours and persists it on its own, so one failure never
//! affects the others. Every emitter exposes a pure `render_*` returning
//! the document text (handy for tests) and a `write_*` that persists it.

pub mod dxf;
pub mod network;
pub mod svg;

pub use dxf::{render_dxf, write_dxf};
pub use network::{build_network, render_network, write_network, NetworkParams};
pub use svg::{render_svg, write_svg};
