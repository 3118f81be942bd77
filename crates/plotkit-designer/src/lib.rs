//! # PlotKit Designer
//!
//! Generators that turn text and parameters into pen strokes, and the G-code
//! writer that sends those strokes to a plotter.
//!
//! ## Components
//!
//! - **Hershey fonts**: parse James Hurt encoded stroke fonts into normalized glyphs
//! - **Text layout**: place glyphs along a line, optionally centered, with
//!   per-character bounding boxes and strike-through squiggles
//! - **Trees**: parametric string-art tree shapes
//! - **G-code**: move/draw/lift sequencing for a pen plotter
//!
//! ## Pipeline
//!
//! ```text
//! HersheyFont ──► layout_message ──► place_message ─┐
//!                                                   ├──► StrokesToGcode
//! TreeParameters ──► TreeGenerator ─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plotkit_designer::{layout_message, place_message, HersheyFont, StrokesToGcode};
//!
//! let font = HersheyFont::load("scripts.jhf")?;
//! let text = layout_message("Happy Holidays", &font, true)?;
//! let placed = place_message(&text, 15.0, 171.0, 30.0, 0.0);
//! let gcode = StrokesToGcode::default().generate(&placed);
//! ```

pub mod gcode_gen;
pub mod hershey;
pub mod text;
pub mod tree;

pub use gcode_gen::StrokesToGcode;
pub use hershey::{Glyph, HersheyFont};
pub use text::{
    cross_out, layout_bboxes, layout_message, message_width, place_message, vertical_squiggle,
};
pub use tree::{tree, TreeGenerator, TreeParameters};
