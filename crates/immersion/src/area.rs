//! Cumulative area function A(h) and the end-to-end drivers.
//!
//! Model
//! - `h` is depth below the top of the sampled region (`max_y` of the bounds),
//!   in steps of `slice_height`; `A(0) = 0`.
//! - Band estimates are independent (one random stream per band); only the
//!   prefix sum is sequential and runs as a separate final pass.
//! - Every band estimate is non-negative, so A(h) is non-decreasing in every
//!   run, not just in expectation.
//!
//! Code cross-refs: `slicing::Slicer`, `sampling::BandEstimator`, `buoyancy`.

use crate::error::ConfigError;
use crate::geom2::Region;
use crate::sampling::{BandEstimator, ReplayToken, UniformSource};
use crate::slicing::{Band, SliceCfg, Slicer};

/// Prefix sums of per-band areas with an injected leading zero.
///
/// Output has `band_areas.len() + 1` entries: `out[0] = 0`,
/// `out[i] = out[i-1] + band_areas[i-1]`.
pub fn accumulate(band_areas: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(band_areas.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for a in band_areas {
        acc += a;
        out.push(acc);
    }
    out
}

/// Sampled A(h): `cumulative[i]` is the area above depth `i · slice_height`.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaFunction {
    slice_height: f64,
    /// `y` coordinate of depth 0 (top of the sampled region).
    anchor_y: f64,
    /// Seed of the per-band streams; `None` for caller-supplied sources or loaded data.
    seed: Option<u64>,
    cumulative: Vec<f64>,
}

impl AreaFunction {
    /// Build from per-band estimates (topmost band first).
    pub fn from_band_areas(slice_height: f64, anchor_y: f64, band_areas: &[f64]) -> Self {
        Self {
            slice_height,
            anchor_y,
            seed: None,
            cumulative: accumulate(band_areas),
        }
    }

    /// Build from an already accumulated sequence (e.g. loaded from disk).
    ///
    /// Returns `None` if the sequence is empty or does not start at 0.
    pub fn from_cumulative(slice_height: f64, cumulative: Vec<f64>) -> Option<Self> {
        if !(slice_height.is_finite() && slice_height > 0.0) {
            return None;
        }
        match cumulative.first() {
            Some(a0) if *a0 == 0.0 => Some(Self {
                slice_height,
                anchor_y: 0.0,
                seed: None,
                cumulative,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn slice_height(&self) -> f64 {
        self.slice_height
    }

    #[inline]
    pub fn anchor_y(&self) -> f64 {
        self.anchor_y
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of samples (band count + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Never true for functions built here (the leading zero is always present).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    #[inline]
    pub fn height_at(&self, i: usize) -> f64 {
        (i as f64) * self.slice_height
    }

    #[inline]
    pub fn areas(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.height_at(i))
    }

    /// `(height, cumulative_area)` pairs in increasing height.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cumulative
            .iter()
            .enumerate()
            .map(|(i, a)| (self.height_at(i), *a))
    }

    /// Deepest sampled depth (`(len − 1) · slice_height`).
    #[inline]
    pub fn total_depth(&self) -> f64 {
        self.height_at(self.len().saturating_sub(1))
    }

    #[inline]
    pub fn total_area(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Per-band areas recovered as first differences.
    pub fn band_areas(&self) -> Vec<f64> {
        self.cumulative.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Estimate A(h) for `region`, sampling band `k` from the stream `(seed, k)`.
pub fn compute_area_function<R>(
    region: &R,
    cfg: &SliceCfg,
    seed: u64,
) -> Result<AreaFunction, ConfigError>
where
    R: Region + ?Sized,
{
    run(region, cfg, Some(seed), |est, band| {
        let mut rng = ReplayToken::new(seed, band.index as u64).to_std_rng();
        est.estimate(region, band, &mut rng).area
    })
}

/// Estimate A(h) for `region`, drawing every sample from `src`.
///
/// Bands consume `src` in top-down order, so a deterministic source gives a
/// deterministic result.
pub fn compute_area_function_with<R, S>(
    region: &R,
    cfg: &SliceCfg,
    src: &mut S,
) -> Result<AreaFunction, ConfigError>
where
    R: Region + ?Sized,
    S: UniformSource + ?Sized,
{
    run(region, cfg, None, |est, band| est.estimate(region, band, &mut *src).area)
}

fn run<R, F>(
    region: &R,
    cfg: &SliceCfg,
    seed: Option<u64>,
    mut estimate_band: F,
) -> Result<AreaFunction, ConfigError>
where
    R: Region + ?Sized,
    F: FnMut(&BandEstimator, &Band) -> f64,
{
    let bounds = region.bounds();
    let bands = cfg.bands_for(bounds.height())?;
    let slicer = Slicer::new(bounds, cfg);
    let estimator = BandEstimator::from_cfg(cfg);

    let band_areas: Vec<f64> = slicer
        .map(|band| estimate_band(&estimator, &band))
        .collect();

    let mut af = AreaFunction::from_band_areas(cfg.slice_height, bounds.max_y, &band_areas);
    af.seed = seed;
    tracing::info!(
        bands,
        samples_per_band = cfg.samples_per_slice,
        slice_height = cfg.slice_height,
        seed = ?seed,
        total_area = af.total_area(),
        "area function"
    );
    Ok(af)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{circle_fan, fan_area, Shape, Triangle};
    use nalgebra::vector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Shape {
        Shape::new(vec![
            Triangle::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]),
            Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn accumulate_prefix_sums() {
        assert_eq!(accumulate(&[]), vec![0.0]);
        assert_eq!(accumulate(&[1.0, 2.0, 0.5]), vec![0.0, 1.0, 3.0, 3.5]);
    }

    #[test]
    fn unit_square_half_slices() {
        let cfg = SliceCfg::new(0.5, 10_000).unwrap();
        let af = compute_area_function(&unit_square(), &cfg, 2024).unwrap();
        let pts: Vec<(f64, f64)> = af.points().collect();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], (0.0, 0.0));
        assert!((pts[1].0 - 0.5).abs() < 1e-12);
        assert!((pts[1].1 - 0.5).abs() < 0.02, "A(0.5) = {}", pts[1].1);
        assert!((pts[2].0 - 1.0).abs() < 1e-12);
        assert!((pts[2].1 - 1.0).abs() < 0.02, "A(1.0) = {}", pts[2].1);
        assert!((af.anchor_y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let cfg = SliceCfg::new(0.25, 500).unwrap();
        let shape = circle_fan(1.0, 12).unwrap();
        let a = compute_area_function(&shape, &cfg, 9).unwrap();
        let b = compute_area_function(&shape, &cfg, 9).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), Some(9));
    }

    #[test]
    fn monotone_for_many_seeds() {
        let cfg = SliceCfg::new(0.05, 200).unwrap();
        let shape = circle_fan(0.2, 12).unwrap();
        for seed in 0..20 {
            let af = compute_area_function(&shape, &cfg, seed).unwrap();
            assert!(af.areas().windows(2).all(|w| w[1] >= w[0]));
        }
    }

    #[test]
    fn circle_converges_to_pi_r_squared() {
        let r = 0.2;
        let shape = circle_fan(r, 128).unwrap();
        let cfg = SliceCfg::new(0.05, 20_000).unwrap();
        let af = compute_area_function(&shape, &cfg, 5).unwrap();
        // 2r / h = 8 bands, so the last sample sits exactly at h = 2r.
        assert_eq!(af.len(), 9);
        assert!((af.total_depth() - 2.0 * r).abs() < 1e-12);
        let pi_r2 = std::f64::consts::PI * r * r;
        assert!((fan_area(r, 128) - pi_r2).abs() / pi_r2 < 1e-3);
        let rel = (af.total_area() - pi_r2).abs() / pi_r2;
        assert!(rel < 0.02, "relative error {rel}");
    }

    #[test]
    fn custom_source_drives_all_bands() {
        let mut rng = StdRng::seed_from_u64(3);
        let cfg = SliceCfg::new(0.5, 5_000).unwrap();
        let af = compute_area_function_with(&unit_square(), &cfg, &mut rng).unwrap();
        assert_eq!(af.len(), 3);
        assert_eq!(af.seed(), None);
        assert!((af.total_area() - 1.0).abs() < 0.02);
        let bands = af.band_areas();
        assert_eq!(bands.len(), 2);
        assert!(bands.iter().all(|a| (a - 0.5).abs() < 0.03));
    }

    #[test]
    fn invalid_cfg_is_rejected_before_sampling() {
        let cfg = SliceCfg {
            slice_height: -1.0,
            samples_per_slice: 10,
        };
        assert_eq!(
            compute_area_function(&unit_square(), &cfg, 0),
            Err(ConfigError::InvalidSliceHeight(-1.0))
        );
    }

    #[test]
    fn too_fine_slicing_is_an_error_not_a_panic() {
        let cfg = SliceCfg::new(1e-30, 1).unwrap();
        let shape = circle_fan(1.0, 12).unwrap();
        assert!(matches!(
            compute_area_function(&shape, &cfg, 1),
            Err(ConfigError::TooManyBands { .. })
        ));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            compute_area_function_with(&shape, &cfg, &mut rng),
            Err(ConfigError::TooManyBands { .. })
        ));
    }

    #[test]
    fn flat_shape_has_only_the_leading_zero() {
        let flat = Shape::new(vec![Triangle::new(
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![2.0, 1.0],
        )])
        .unwrap();
        let af = compute_area_function(&flat, &SliceCfg::default(), 1).unwrap();
        assert_eq!(af.areas(), &[0.0]);
        assert_eq!(af.total_depth(), 0.0);
    }

    #[test]
    fn from_cumulative_requires_leading_zero() {
        assert!(AreaFunction::from_cumulative(0.5, vec![]).is_none());
        assert!(AreaFunction::from_cumulative(0.5, vec![1.0, 2.0]).is_none());
        assert!(AreaFunction::from_cumulative(0.0, vec![0.0]).is_none());
        let af = AreaFunction::from_cumulative(0.5, vec![0.0, 1.0]).unwrap();
        assert_eq!(af.total_depth(), 0.5);
        assert_eq!(af.heights().collect::<Vec<_>>(), vec![0.0, 0.5]);
    }
}
