use super::types::{BoundingBox, Point, Region};
use crate::error::ShapeError;

/// Three ordered points. Degenerate (collinear) triangles are allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pts: [Point; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { pts: [a, b, c] }
    }

    /// Build from a point list; anything other than exactly 3 points is rejected.
    pub fn from_points(points: &[Point]) -> Result<Self, ShapeError> {
        match points {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(ShapeError::MalformedTriangle {
                count: points.len(),
            }),
        }
    }

    /// Build from flat coordinates `[x1, y1, x2, y2, x3, y3]`.
    pub fn from_coords(coords: &[f64]) -> Result<Self, ShapeError> {
        if coords.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateCount {
                values: coords.len(),
            });
        }
        let pts: Vec<Point> = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        Self::from_points(&pts)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.pts
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        (self.pts[0] + self.pts[1] + self.pts[2]) / 3.0
    }

    /// Unsigned area (half the absolute cross product of two edges).
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.pts;
        0.5 * sign(a, b, c).abs()
    }

    /// Inclusive membership: inside or on an edge/vertex.
    ///
    /// The three edge orientations may be zero or share one strict sign; a point
    /// is outside only when both a strictly negative and a strictly positive
    /// orientation occur. Points outside the closed bounding box are rejected
    /// first, which confines degenerate triangles to their point or segment.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        if !self.bounds().contains(p) {
            return false;
        }
        let [a, b, c] = self.pts;
        let d1 = sign(p, a, b);
        let d2 = sign(p, b, c);
        let d3 = sign(p, c, a);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

impl Region for Triangle {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        Triangle::contains(self, p)
    }
    fn bounds(&self) -> BoundingBox {
        let [a, b, c] = self.pts;
        BoundingBox {
            min_x: a.x.min(b.x).min(c.x),
            min_y: a.y.min(b.y).min(c.y),
            max_x: a.x.max(b.x).max(c.x),
            max_y: a.y.max(b.y).max(c.y),
        }
    }
}

/// Orientation of `p` relative to the directed edge `a → b` (2D cross product).
#[inline]
fn sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}
