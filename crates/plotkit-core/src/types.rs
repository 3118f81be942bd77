//! Stroke data model.
//!
//! A [`StrokeCollection`] is an ordered list of polylines; each polyline is an
//! ordered list of points drawn with the pen down. Polyline order carries no
//! rendering meaning but is preserved so output is deterministic.

use serde::{Deserialize, Serialize};

/// A 2D point in plotter units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous pen-down stroke. A single point is a dot.
pub type Polyline = Vec<Point>;

/// Axis-aligned bounds of a stroke collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }
}

/// Ordered set of polylines making up a glyph, message or shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeCollection {
    polylines: Vec<Polyline>,
}

impl StrokeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            polylines: Vec::with_capacity(capacity),
        }
    }

    /// Appends a polyline. Empty polylines are dropped since they draw nothing.
    pub fn push(&mut self, polyline: Polyline) {
        if !polyline.is_empty() {
            self.polylines.push(polyline);
        }
    }

    /// Appends every polyline of `other`, keeping its order.
    pub fn append(&mut self, other: StrokeCollection) {
        self.polylines.extend(other.polylines);
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polyline> {
        self.polylines.iter()
    }

    /// Iterates every point of every polyline in draw order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.polylines.iter().flatten()
    }

    /// Number of polylines.
    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Total number of points across all polylines.
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(Vec::len).sum()
    }

    /// Summed length of all pen-down segments.
    pub fn drawn_length(&self) -> f64 {
        self.polylines
            .iter()
            .map(|line| line.windows(2).map(|w| w[0].distance_to(&w[1])).sum::<f64>())
            .sum()
    }

    /// Bounds of every point, or `None` when the collection has no points.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let first = points.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Returns a collection of the same shape with `f` applied to each point.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self {
            polylines: self
                .polylines
                .iter()
                .map(|line| line.iter().map(|p| f(*p)).collect())
                .collect(),
        }
    }

    /// Shifts every point in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in self.polylines.iter_mut().flatten() {
            p.x += dx;
            p.y += dy;
        }
    }

    pub fn into_inner(self) -> Vec<Polyline> {
        self.polylines
    }
}

impl From<Vec<Polyline>> for StrokeCollection {
    fn from(polylines: Vec<Polyline>) -> Self {
        polylines.into_iter().collect()
    }
}

impl FromIterator<Polyline> for StrokeCollection {
    fn from_iter<I: IntoIterator<Item = Polyline>>(iter: I) -> Self {
        let mut strokes = Self::new();
        strokes.extend(iter);
        strokes
    }
}

impl Extend<Polyline> for StrokeCollection {
    fn extend<I: IntoIterator<Item = Polyline>>(&mut self, iter: I) {
        for polyline in iter {
            self.push(polyline);
        }
    }
}

impl IntoIterator for StrokeCollection {
    type Item = Polyline;
    type IntoIter = std::vec::IntoIter<Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.polylines.into_iter()
    }
}

impl<'a> IntoIterator for &'a StrokeCollection {
    type Item = &'a Polyline;
    type IntoIter = std::slice::Iter<'a, Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.polylines.iter()
    }
}
