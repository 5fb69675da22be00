//! Monte Carlo area estimation for a single band.
//!
//! Model
//! - Draw `n` points uniformly over the band rectangle, count membership hits,
//!   and scale the hit ratio by the rectangle area. Unbiased, with standard
//!   error ∝ 1/√n; the sample budget is fixed (no adaptive refinement).
//! - Zero-width or zero-height rectangles short-circuit to an empty estimate.
//!
//! Code cross-refs: `UniformSource`, `ReplayToken`, `slicing::Band`, `geom2::Region`.

mod replay;
mod source;

pub use replay::ReplayToken;
pub use source::UniformSource;

use crate::geom2::{Point, Region};
use crate::slicing::{Band, SliceCfg};

/// Outcome of sampling one band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandEstimate {
    pub hits: usize,
    pub samples: usize,
    /// `hits / samples · rect_area`.
    pub area: f64,
}

impl BandEstimate {
    pub const EMPTY: Self = Self {
        hits: 0,
        samples: 0,
        area: 0.0,
    };

    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.hits as f64 / self.samples as f64
        }
    }
}

/// Fixed-budget uniform sampler.
#[derive(Clone, Copy, Debug)]
pub struct BandEstimator {
    samples: usize,
}

impl BandEstimator {
    #[inline]
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    #[inline]
    pub fn from_cfg(cfg: &SliceCfg) -> Self {
        Self::new(cfg.samples_per_slice)
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Estimate `area(region ∩ band.rect())`.
    pub fn estimate<R, S>(&self, region: &R, band: &Band, src: &mut S) -> BandEstimate
    where
        R: Region + ?Sized,
        S: UniformSource + ?Sized,
    {
        let rect = band.rect();
        let rect_area = rect.area();
        if !(rect_area > 0.0) || self.samples == 0 {
            tracing::debug!(band = band.index, "degenerate band rectangle");
            return BandEstimate::EMPTY;
        }
        let mut hits = 0usize;
        for _ in 0..self.samples {
            let x = src.uniform(rect.min_x, rect.max_x);
            let y = src.uniform(rect.min_y, rect.max_y);
            if region.contains(Point::new(x, y)) {
                hits += 1;
            }
        }
        let area = hits as f64 / self.samples as f64 * rect_area;
        tracing::debug!(
            band = band.index,
            bottom = band.bottom,
            top = band.top,
            hits,
            area,
            "band estimate"
        );
        BandEstimate {
            hits,
            samples: self.samples,
            area,
        }
    }
}
