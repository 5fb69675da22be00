use super::triangle::Triangle;
use super::types::{BoundingBox, Point, Region};
use crate::error::ShapeError;

/// Non-empty union of triangles (may be non-convex or disjoint).
///
/// Invariants:
/// - at least one triangle;
/// - every vertex coordinate is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    triangles: Vec<Triangle>,
}

impl Shape {
    pub fn new(triangles: Vec<Triangle>) -> Result<Self, ShapeError> {
        if triangles.is_empty() {
            return Err(ShapeError::EmptyShape);
        }
        if let Some(p) = triangles
            .iter()
            .flat_map(|t| t.vertices().iter())
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::NonFinite { x: p.x, y: p.y });
        }
        Ok(Self { triangles })
    }

    /// Build from flat coordinate rows (`[x1, y1, x2, y2, x3, y3]` each).
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let triangles = rows
            .into_iter()
            .map(|r| Triangle::from_coords(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(triangles)
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Componentwise min/max over all vertices of all triangles.
    pub fn bounding_box(&self) -> BoundingBox {
        // Non-empty by construction; the fallback is unreachable.
        BoundingBox::from_points(self.triangles.iter().flat_map(|t| t.vertices().iter().copied()))
            .unwrap_or(BoundingBox {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 0.0,
                max_y: 0.0,
            })
    }

    /// True iff `p` lies in (or on the boundary of) any triangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.triangles.iter().any(|t| t.contains(p))
    }

    /// Sum of triangle areas (overlaps counted twice).
    pub fn triangle_area_sum(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

impl Region for Shape {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        Shape::contains(self, p)
    }
    #[inline]
    fn bounds(&self) -> BoundingBox {
        self.bounding_box()
    }
}
