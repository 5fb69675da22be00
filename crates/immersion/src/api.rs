//! Flat re-export surface for callers that want everything in one place
//! (CLI, benches, notebooks). Not a stability promise.

// Geometry
pub use crate::geom2::{circle_fan, fan_area, BoundingBox, Point, Region, Shape, Triangle};
// Slicing and sampling
pub use crate::sampling::{BandEstimate, BandEstimator, ReplayToken, UniformSource};
pub use crate::slicing::{band_count, Band, SliceCfg, Slicer};
// Area function
pub use crate::area::{accumulate, compute_area_function, compute_area_function_with, AreaFunction};
pub use crate::buoyancy::{equilibrium_depth, WATER_DENSITY};
pub use crate::error::{AreaError, ConfigError, ShapeError};

/// Read shape rows, validate, and estimate A(h) in one call.
///
/// Each row holds six coordinates `x1, y1, x2, y2, x3, y3`.
pub fn area_function_from_rows<I, R>(rows: I, cfg: &SliceCfg, seed: u64) -> Result<AreaFunction, AreaError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    cfg.validate()?;
    let shape = Shape::from_rows(rows)?;
    Ok(compute_area_function(&shape, cfg, seed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pipeline_and_errors() {
        let cfg = SliceCfg::new(0.5, 2_000).unwrap();
        let rows = vec![
            vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        ];
        let af = area_function_from_rows(&rows, &cfg, 11).unwrap();
        assert_eq!(af.len(), 3);

        let bad = vec![vec![0.0, 0.0, 1.0, 0.0]];
        assert_eq!(
            area_function_from_rows(&bad, &cfg, 11),
            Err(AreaError::Shape(ShapeError::MalformedTriangle { count: 2 }))
        );
        let none: Vec<Vec<f64>> = Vec::new();
        assert_eq!(
            area_function_from_rows(&none, &cfg, 11),
            Err(AreaError::Shape(ShapeError::EmptyShape))
        );
        let zero = SliceCfg {
            slice_height: 0.5,
            samples_per_slice: 0,
        };
        assert_eq!(
            area_function_from_rows(&rows, &zero, 11),
            Err(AreaError::Config(ConfigError::ZeroSamples))
        );
    }
}
