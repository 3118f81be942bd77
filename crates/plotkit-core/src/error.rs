//! Error handling for PlotKit
//!
//! Provides error types for the two fallible stages of the pipeline:
//! - Format errors (malformed stroke-font descriptions)
//! - Layout errors (characters missing from a loaded font)
//!
//! Transforms and shape generators are infallible. All error types use
//! `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Font description format error
///
/// Raised while parsing a Hershey font description. Loading aborts on the
/// first error and no partial font is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The description contains no glyph records
    #[error("Font description contains no glyphs")]
    Empty,

    /// A fixed-width header field is missing or not an integer
    #[error("Invalid {field} field in glyph record {index} (line {line}): {value:?}")]
    InvalidField {
        /// Zero-based load index of the record.
        index: usize,
        /// One-based physical line number.
        line: usize,
        /// Name of the field ("number" or "pairs").
        field: &'static str,
        /// The raw field text.
        value: String,
    },

    /// The input ended before the record's coordinate pairs were read
    #[error("Glyph record {index} truncated: expected {expected} coordinate pairs, found {found}")]
    Truncated {
        /// Zero-based load index of the record.
        index: usize,
        /// Pair count declared in the header.
        expected: usize,
        /// Pairs available before the input ended.
        found: usize,
    },

    /// A record declares fewer than the one mandatory metrics pair
    #[error("Glyph record {index} has no metrics pair")]
    MissingMetrics {
        /// Zero-based load index of the record.
        index: usize,
    },

    /// Non-blank text follows the last declared pair of a record
    #[error("Unexpected data after glyph record {index} (line {line}): {data:?}")]
    TrailingData {
        /// Zero-based load index of the record.
        index: usize,
        /// One-based physical line number.
        line: usize,
        /// The unexpected text.
        data: String,
    },

    /// Record text outside printable ASCII
    #[error("Non-ASCII data in glyph record {index} (line {line})")]
    NonAscii {
        /// Zero-based load index of the record.
        index: usize,
        /// One-based physical line number.
        line: usize,
    },

    /// More glyphs than there are characters after space
    #[error("Glyph index {index} does not map to a character")]
    CharacterOverflow {
        /// Zero-based load index of the record.
        index: usize,
    },

    /// Every glyph lies on the baseline, so the font cannot be normalized
    #[error("Font has zero vertical span (top == bottom == {value})")]
    ZeroSpan {
        /// The shared top/bottom value.
        value: f64,
    },
}

/// Font loading error
///
/// Wraps the file read together with the format errors above.
#[derive(Error, Debug)]
pub enum FontLoadError {
    /// The font file could not be read
    #[error("Failed to read font file {path}: {source}")]
    Io {
        /// Path of the font file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The font file was read but is malformed
    #[error("Malformed font file {path}: {source}")]
    Format {
        /// Path of the font file.
        path: PathBuf,
        /// Underlying format error.
        #[source]
        source: FormatError,
    },
}

/// Text layout error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The message contains a character the font does not define
    #[error("Unknown character {character:?} at position {position}")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the message.
        position: usize,
    },
}

/// Main error type for PlotKit
///
/// Aggregates the layer errors so callers composing several stages can use a
/// single `Result` type.
#[derive(Error, Debug)]
pub enum Error {
    /// Font format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Font loading error
    #[error(transparent)]
    FontLoad(#[from] FontLoadError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Check whether this error came from font parsing or loading
    pub fn is_font_error(&self) -> bool {
        matches!(self, Self::Format(_) | Self::FontLoad(_))
    }
}

/// Result type for PlotKit operations
pub type Result<T> = std::result::Result<T, Error>;
