//! Cross-section area functions by Monte Carlo slicing.
//!
//! Given a 2D cross-section as a union of triangles, estimate the cumulative
//! area A(h) enclosed between the top of the shape and depth `h`, sampled at
//! fixed depth steps. Typical use: relate immersion depth to displaced
//! cross-sectional area for a floating body.
//!
//! Pipeline
//! - `geom2`: triangles, shapes, bounding boxes, membership (`Region`).
//! - `slicing`: top-down fixed-height bands (`SliceCfg`, `Slicer`).
//! - `sampling`: per-band hit-ratio estimate (`BandEstimator`, `UniformSource`).
//! - `area`: prefix sums into `AreaFunction` and the run drivers.
//! - `buoyancy`: interpolation/inversion of A(h) and floating equilibrium.

pub mod api;
pub mod area;
pub mod buoyancy;
pub mod error;
pub mod geom2;
pub mod sampling;
pub mod slicing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{compute_area_function, compute_area_function_with, AreaFunction};
pub use error::{AreaError, ConfigError, ShapeError};
pub use geom2::{Point, Region, Shape, Triangle};
pub use slicing::SliceCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{accumulate, compute_area_function, compute_area_function_with, AreaFunction};
    pub use crate::buoyancy::{equilibrium_depth, WATER_DENSITY};
    pub use crate::error::{AreaError, ConfigError, ShapeError};
    pub use crate::geom2::{circle_fan, BoundingBox, Point, Region, Shape, Triangle};
    pub use crate::sampling::{BandEstimate, BandEstimator, ReplayToken, UniformSource};
    pub use crate::slicing::{Band, SliceCfg, Slicer};
}
