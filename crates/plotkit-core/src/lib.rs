//! # PlotKit Core
//!
//! Core types and utilities for PlotKit.
//! Provides the stroke data model shared by every generator, the affine
//! transform used for final placement, and the error types surfaced by
//! font loading and text layout.

pub mod error;
pub mod transform;
pub mod types;

pub use error::{Error, FontLoadError, FormatError, LayoutError, Result};
pub use transform::{normalize, Transform};
pub use types::{Bounds, Point, Polyline, StrokeCollection};
