//! # PlotKit
//!
//! Turns short messages and decorative shapes into pen-plotter G-code.
//!
//! ## Architecture
//!
//! PlotKit is organized as a workspace with multiple crates:
//!
//! 1. **plotkit-core** - Stroke types, affine transforms, errors
//! 2. **plotkit-designer** - Hershey fonts, text layout, trees, G-code output
//! 3. **plotkit-settings** - Configuration loading, saving, validation
//! 4. **plotkit** - Card/envelope composition and the main binary

pub mod card;

use anyhow::Context;
use plotkit_settings::{Config, PlotterSettings};
use std::path::PathBuf;
use tracing::{info, warn};

pub use card::{
    envelope, inside_of_card, outside_of_card, CardLayout, EnvelopeLayout, TextPlacement,
};
pub use plotkit_core::{
    normalize, Bounds, Error, FontLoadError, FormatError, LayoutError, Point, Polyline, Result,
    StrokeCollection, Transform,
};
pub use plotkit_designer::{
    cross_out, layout_bboxes, layout_message, message_width, place_message, tree,
    vertical_squiggle, Glyph, HersheyFont, StrokesToGcode, TreeGenerator, TreeParameters,
};
pub use plotkit_designer as designer;
pub use plotkit_settings as settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Builds the G-code writer described by the plotter settings.
pub fn gcode_writer(plotter: &PlotterSettings) -> StrokesToGcode {
    StrokesToGcode::new(plotter.draw_depth, plotter.safe_depth)
        .with_feed_rate(plotter.feed_rate)
        .with_park(plotter.park_x, plotter.park_y, plotter.park_z)
        .with_line_numbers(plotter.line_numbers_enabled)
}

/// Renders the card outside, card inside and (when a recipient is set) the
/// envelope into the configured output directory.
///
/// Returns the paths written, in that order.
pub fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let script = HersheyFont::load(&config.fonts.script_font)?;
    let block = HersheyFont::load(&config.fonts.block_font)?;
    let writer = gcode_writer(&config.plotter);
    let layout = CardLayout::default();

    let out_dir = &config.output.directory;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();

    let outside = outside_of_card(&script, &block, &layout).context("Outside of card")?;
    let path = out_dir.join("card_outside.gcode");
    writer.write_file(&outside, &path)?;
    written.push(path);

    let inside =
        inside_of_card(&script, &block, &config.card.closing, &layout).context("Inside of card")?;
    let path = out_dir.join("card_inside.gcode");
    writer.write_file(&inside, &path)?;
    written.push(path);

    if config.card.recipient.is_empty() {
        warn!("No recipient configured, skipping envelope");
    } else {
        let (strokes, who) = envelope(
            &config.card.sender,
            &config.card.recipient,
            &block,
            &EnvelopeLayout::default(),
        )
        .context("Envelope")?;
        let path = out_dir.join(format!("envelope_{}.gcode", who));
        writer.write_file(&strokes, &path)?;
        written.push(path);
    }

    info!("Generated {} G-code files in {}", written.len(), out_dir.display());
    Ok(written)
}
