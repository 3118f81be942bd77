//! String-art tree generator.
//!
//! A fan of chevron "branches" over a quarter circle plus a small rectangular
//! trunk below the origin. The tree's height is measured from the top of the
//! trunk; the trunk extends a further `0.1 * height` below it.

use plotkit_core::{Point, StrokeCollection, Transform};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

const TRUNK_HALF_WIDTH: f64 = 0.1;
const TRUNK_DEPTH: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParameters {
    /// Overall width in plotter units
    pub width: f64,
    /// Height above the trunk in plotter units
    pub height: f64,
    /// Number of branch lines
    pub n_steps: usize,
    pub base_x: f64,
    pub base_y: f64,
    /// Counter-clockwise rotation in radians
    pub rotation: f64,
}

impl Default for TreeParameters {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            n_steps: 20,
            base_x: 0.0,
            base_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl TreeParameters {
    pub fn new(width: f64, height: f64, n_steps: usize, base_x: f64, base_y: f64) -> Self {
        Self {
            width,
            height,
            n_steps,
            base_x,
            base_y,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

pub struct TreeGenerator {
    params: TreeParameters,
}

impl TreeGenerator {
    pub fn new(params: TreeParameters) -> Self {
        Self { params }
    }

    /// Branches in the unit frame: half-width 1, height 1.
    ///
    /// Consecutive branches are drawn in opposite directions so each one starts
    /// near where the previous one ended.
    fn branches(&self) -> impl Iterator<Item = Vec<Point>> {
        let n = self.params.n_steps;
        (0..n).map(move |i| {
            let theta = if n > 1 {
                FRAC_PI_2 * i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            let (sin, cos) = theta.sin_cos();
            let x = if i % 2 == 0 { cos } else { -cos };
            vec![Point::new(x, 0.0), Point::new(0.0, sin), Point::new(-x, 0.0)]
        })
    }

    fn trunk() -> [Vec<Point>; 2] {
        [
            vec![
                Point::new(-TRUNK_HALF_WIDTH, 0.0),
                Point::new(-TRUNK_HALF_WIDTH, TRUNK_DEPTH),
                Point::new(TRUNK_HALF_WIDTH, TRUNK_DEPTH),
            ],
            vec![
                Point::new(TRUNK_HALF_WIDTH, TRUNK_DEPTH),
                Point::new(TRUNK_HALF_WIDTH, 0.0),
                Point::new(-TRUNK_HALF_WIDTH, 0.0),
            ],
        ]
    }

    pub fn generate(&self) -> StrokeCollection {
        let p = &self.params;
        let mut strokes = StrokeCollection::with_capacity(p.n_steps + 2);
        strokes.extend(self.branches());
        strokes.extend(Self::trunk());

        // Branch geometry has unit radius, so halve the width to get a diameter.
        Transform::new(p.width / 2.0, p.height, p.rotation, p.base_x, p.base_y).apply(&strokes)
    }
}

/// Generates a tree from explicit parameters.
pub fn tree(
    width: f64,
    height: f64,
    n_steps: usize,
    base_x: f64,
    base_y: f64,
    rotation: f64,
) -> StrokeCollection {
    let params =
        TreeParameters::new(width, height, n_steps, base_x, base_y).with_rotation(rotation);
    TreeGenerator::new(params).generate()
}
