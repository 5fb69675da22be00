//! Fan-triangulated circle, the synthetic test cross-section.

use std::f64::consts::TAU;

use super::shape::Shape;
use super::triangle::Triangle;
use super::types::Point;
use crate::error::ShapeError;

/// Regular `segments`-gon of circumradius `radius` centred at the origin, as a
/// fan of triangles `(0,0), v_i, v_{i+1}` with `v_i = r (cos θ_i, sin θ_i)` and
/// `θ_i = 2π i / segments`.
pub fn circle_fan(radius: f64, segments: usize) -> Result<Shape, ShapeError> {
    if !(radius.is_finite() && radius > 0.0) || segments < 3 {
        return Err(ShapeError::InvalidCircle { radius, segments });
    }
    let vertex = |i: usize| {
        let th = (i as f64) * TAU / (segments as f64);
        Point::new(th.cos() * radius, th.sin() * radius)
    };
    let tris = (0..segments)
        .map(|i| Triangle::new(Point::zeros(), vertex(i), vertex(i + 1)))
        .collect();
    Shape::new(tris)
}

/// Exact area of the fan polygon: `½ n r² sin(2π/n)`.
pub fn fan_area(radius: f64, segments: usize) -> f64 {
    let n = segments as f64;
    0.5 * n * radius * radius * (TAU / n).sin()
}
