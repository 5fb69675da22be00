//! Reading A(h) back: interpolation, inversion and floating equilibrium.
//!
//! Model
//! - A(h) is treated as piecewise linear between samples, 0 above the top and
//!   constant below the deepest sample.
//! - A prism with this cross-section, extruded by `thickness`, floats where the
//!   displaced fluid mass equals its own: `density · thickness · A(h) = mass`.

use crate::area::AreaFunction;

/// Fresh water at room temperature, kg/m³.
pub const WATER_DENSITY: f64 = 997.0;

impl AreaFunction {
    /// Interpolated area above depth `depth`.
    pub fn area_at(&self, depth: f64) -> f64 {
        let a = self.areas();
        if !(depth > 0.0) || a.len() < 2 {
            return 0.0;
        }
        if depth >= self.total_depth() {
            return self.total_area();
        }
        let h = self.slice_height();
        let i = ((depth / h).floor() as usize).min(a.len() - 2);
        let t = ((depth - self.height_at(i)) / h).clamp(0.0, 1.0);
        a[i] + t * (a[i + 1] - a[i])
    }

    /// Smallest depth at which the interpolated area reaches `target`.
    ///
    /// `Some(0.0)` for non-positive targets; `None` if `target` exceeds the total area.
    pub fn depth_for_area(&self, target: f64) -> Option<f64> {
        if target.is_nan() || target > self.total_area() {
            return None;
        }
        if target <= 0.0 {
            return Some(0.0);
        }
        let a = self.areas();
        // A(h) is non-decreasing; the first sample reaching `target` bounds the segment.
        let i = a.partition_point(|v| *v < target);
        if i == 0 {
            return Some(0.0);
        }
        let (lo, hi) = (a[i - 1], a[i]);
        let t = (target - lo) / (hi - lo);
        Some(self.height_at(i - 1) + t * self.slice_height())
    }
}

/// Immersion depth at which a prism of `mass` (kg) floats.
///
/// `thickness` is the extrusion length (m) of the cross-section, `density` the
/// fluid density (kg/m³). `None` if the fully immersed prism still sinks or an
/// input is not positive.
pub fn equilibrium_depth(af: &AreaFunction, mass: f64, thickness: f64, density: f64) -> Option<f64> {
    if !(mass > 0.0 && thickness > 0.0 && density > 0.0) {
        return None;
    }
    let depth = af.depth_for_area(mass / (density * thickness));
    tracing::debug!(mass, thickness, density, depth = ?depth, "equilibrium");
    depth
}
