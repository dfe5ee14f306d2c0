#![doc = include_str!("../README.md")]

pub mod batch;
pub mod config;
pub mod contours;
pub mod diagnostics;
pub mod edges;
pub mod emit;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: per-file pipeline and batch driver.
pub use crate::batch::run_batch;
pub use crate::config::GeneratorParams;
pub use crate::error::Error;
pub use crate::pipeline::Pipeline;

// Core stages, usable on their own.
pub use crate::contours::{trace, TraceParams, TraceResult};
pub use crate::edges::{detect, EdgeParams};
pub use crate::types::{Contour, Point};
