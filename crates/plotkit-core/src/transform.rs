//! Affine placement of stroke collections.
//!
//! Every generator produces strokes in its own unit space; a [`Transform`]
//! moves them onto the plotter bed. The operation order is fixed: scale each
//! axis independently, rotate counter-clockwise about the origin, then
//! translate.

use crate::types::{Point, Polyline, StrokeCollection};
use serde::{Deserialize, Serialize};

/// Scale, rotation and translation applied to every point of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Multiplier for X before rotation
    pub width_scale: f64,
    /// Multiplier for Y before rotation
    pub height_scale: f64,
    /// Counter-clockwise rotation in radians
    pub rotation: f64,
    pub base_x: f64,
    pub base_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            width_scale: 1.0,
            height_scale: 1.0,
            rotation: 0.0,
            base_x: 0.0,
            base_y: 0.0,
        }
    }

    pub const fn new(
        width_scale: f64,
        height_scale: f64,
        rotation: f64,
        base_x: f64,
        base_y: f64,
    ) -> Self {
        Self {
            width_scale,
            height_scale,
            rotation,
            base_x,
            base_y,
        }
    }

    /// Same scale on both axes, as used for placing text of a given height.
    pub const fn uniform(scale: f64, base_x: f64, base_y: f64, rotation: f64) -> Self {
        Self::new(scale, scale, rotation, base_x, base_y)
    }

    /// Transforms a single point: scale, rotate, translate.
    pub fn apply_point(&self, p: Point) -> Point {
        let x = p.x * self.width_scale;
        let y = p.y * self.height_scale;

        let (sin, cos) = self.rotation.sin_cos();
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;

        Point::new(rx + self.base_x, ry + self.base_y)
    }

    pub fn apply_polyline(&self, polyline: &[Point]) -> Polyline {
        polyline.iter().map(|p| self.apply_point(*p)).collect()
    }

    /// Returns a new collection with the same polyline and point counts.
    pub fn apply(&self, strokes: &StrokeCollection) -> StrokeCollection {
        strokes.map_points(|p| self.apply_point(p))
    }
}

/// Rescales strokes so the longer side of their bounding box is 1.0 and the
/// lower-left corner sits at the origin.
///
/// Empty or zero-extent collections are returned unchanged.
pub fn normalize(strokes: &StrokeCollection) -> StrokeCollection {
    let Some(bounds) = strokes.bounds() else {
        return strokes.clone();
    };
    let scale = bounds.width().max(bounds.height());
    if scale <= 0.0 {
        return strokes.clone();
    }
    strokes.map_points(|p| Point::new((p.x - bounds.min_x) / scale, (p.y - bounds.min_y) / scale))
}
