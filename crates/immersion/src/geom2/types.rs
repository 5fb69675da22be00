//! Basic 2D types shared by triangles, shapes and the slicer.
//!
//! - `Point`: plain 2D coordinate.
//! - `BoundingBox`: axis-aligned box, derived on demand (never stored by shapes).
//! - `Region`: membership capability consumed by the slicer/estimator.

use nalgebra::Vector2;

/// 2D coordinate `(x, y)`.
pub type Point = Vector2<f64>;

/// Axis-aligned bounding box `[min_x, max_x] × [min_y, max_y]`.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y` when built from at least one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Componentwise min/max over `points`; `None` if the iterator is empty.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(it.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    /// Closed-box membership.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// A closed 2D region that can be sliced and sampled.
///
/// Only triangle soups implement this today; anything answering point
/// membership plus a finite bounding box (e.g. polygons with holes) can be fed
/// to the slicer and estimator unchanged.
pub trait Region {
    /// True iff `p` lies inside or on the boundary.
    fn contains(&self, p: Point) -> bool;
    /// Axis-aligned bounds of the region.
    fn bounds(&self) -> BoundingBox;
}
