//! # Text Layout
//!
//! Turns a message into strokes using a [`HersheyFont`].
//!
//! Characters are placed left to right with a running cursor: before drawing
//! a glyph the cursor advances by the previous glyph's right metric plus the
//! negated left metric of the current one. Optional centering shifts the whole
//! message so the midpoint of its total advance sits at X = 0.
//!
//! Output is in normalized font units (cap-to-descender span of 1.0); use
//! [`place_message`] to size and position it on the plotter bed.

use crate::hershey::{Glyph, HersheyFont};
use plotkit_core::{LayoutError, Point, StrokeCollection, Transform};
use std::f64::consts::TAU;

/// Points per squiggle cycle.
const SQUIGGLE_SAMPLES_PER_CYCLE: f64 = 30.0;

/// Walks a message, yielding each glyph with the cursor position it is drawn at.
///
/// Returns the placed glyphs together with the final advance
/// `x_start + prev_right`.
fn advance<'f>(
    message: &str,
    font: &'f HersheyFont,
) -> Result<(Vec<(f64, &'f Glyph)>, f64), LayoutError> {
    let mut placed = Vec::with_capacity(message.len());
    let mut x_start = 0.0;
    let mut prev_right = 0.0;

    for (position, character) in message.chars().enumerate() {
        let glyph = font
            .get(character)
            .ok_or(LayoutError::UnknownCharacter {
                character,
                position,
            })?;
        x_start += prev_right - glyph.left;
        prev_right = glyph.right;
        placed.push((x_start, glyph));
    }

    Ok((placed, x_start + prev_right))
}

fn center_offset(center: bool, total_advance: f64) -> f64 {
    if center {
        total_advance / 2.0
    } else {
        0.0
    }
}

/// Lays out `message` as one stroke collection.
///
/// Fails on the first character the font does not define. An empty message
/// yields an empty collection.
pub fn layout_message(
    message: &str,
    font: &HersheyFont,
    center: bool,
) -> Result<StrokeCollection, LayoutError> {
    let (placed, total) = advance(message, font)?;
    let x_center = center_offset(center, total);

    let mut strokes = StrokeCollection::new();
    for (x_start, glyph) in placed {
        let dx = x_start - x_center;
        strokes.extend(
            glyph
                .strokes
                .iter()
                .map(|line| line.iter().map(|p| Point::new(p.x + dx, p.y)).collect()),
        );
    }
    Ok(strokes)
}

/// Lays out one 4-corner rectangle per character of `message`.
///
/// Corners run lower-left, lower-right, upper-right, upper-left using each
/// glyph's own metrics. Centering uses the same offset as [`layout_message`],
/// so boxes line up with the text drawn for the same message.
pub fn layout_bboxes(
    message: &str,
    font: &HersheyFont,
    center: bool,
) -> Result<StrokeCollection, LayoutError> {
    let (placed, total) = advance(message, font)?;
    let x_center = center_offset(center, total);

    Ok(placed
        .into_iter()
        .map(|(x_start, glyph)| {
            let x0 = x_start + glyph.left - x_center;
            let x1 = x_start + glyph.right - x_center;
            vec![
                Point::new(x0, glyph.bottom),
                Point::new(x1, glyph.bottom),
                Point::new(x1, glyph.top),
                Point::new(x0, glyph.top),
            ]
        })
        .collect())
}

/// Total advance of the uncentered message, in font units.
pub fn message_width(message: &str, font: &HersheyFont) -> Result<f64, LayoutError> {
    advance(message, font).map(|(_, total)| total)
}

/// Sizes and positions laid-out text. Width scales with height.
pub fn place_message(
    strokes: &StrokeCollection,
    height: f64,
    base_x: f64,
    base_y: f64,
    rotation: f64,
) -> StrokeCollection {
    Transform::uniform(height, base_x, base_y, rotation).apply(strokes)
}

/// A vertical sine wave filling the unit square.
///
/// `ceil(30 * cycles)` samples of `x = (sin(2π·cycles·t) + 1) / 2`, `y = t`
/// with `t` evenly spaced over `[0, 1]`.
pub fn vertical_squiggle(cycles: f64) -> StrokeCollection {
    let samples = (SQUIGGLE_SAMPLES_PER_CYCLE * cycles).ceil();
    if samples < 1.0 {
        return StrokeCollection::new();
    }
    let samples = samples as usize;

    let line = (0..samples)
        .map(|i| {
            let t = if samples == 1 {
                0.0
            } else {
                i as f64 / (samples - 1) as f64
            };
            Point::new(((TAU * cycles * t).sin() + 1.0) / 2.0, t)
        })
        .collect();
    StrokeCollection::from(vec![line])
}

/// Strike-through mark stretched over one bounding box from [`layout_bboxes`].
///
/// The squiggle starts at the box's lower-left corner and spans its full width
/// and height.
pub fn cross_out(bbox: &[Point], cycles: f64) -> StrokeCollection {
    let (lower_left, lower_right, upper_right) = (bbox[0], bbox[1], bbox[2]);
    let transform = Transform::new(
        lower_right.x - lower_left.x,
        upper_right.y - lower_right.y,
        0.0,
        lower_left.x,
        lower_left.y,
    );
    transform.apply(&vertical_squiggle(cycles))
}
