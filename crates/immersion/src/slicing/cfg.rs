//! Run resolution (band height and per-band sample budget).
//!
//! Policy
//! - Parameters travel inside `SliceCfg`, never as process-wide constants, so runs
//!   at different resolutions can coexist in one process.
//! - Defaults reproduce the historical fixed resolution (0.5 height units, 10k samples).

use crate::error::ConfigError;

/// Relative tolerance used when deciding whether `extent / slice_height` is integral.
pub(crate) const SNAP_EPS: f64 = 1e-9;

/// Upper bound on bands per run; finer slicing is rejected instead of allocated.
pub const MAX_BANDS: usize = 1_000_000;

/// Slicing/sampling configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceCfg {
    /// Band height (`SLICE_HEIGHT`), strictly positive.
    pub slice_height: f64,
    /// Uniform samples drawn per band (`SAMPLES_PER_SLICE`), positive.
    pub samples_per_slice: usize,
}

impl Default for SliceCfg {
    fn default() -> Self {
        Self {
            slice_height: 0.5,
            samples_per_slice: 10_000,
        }
    }
}

impl SliceCfg {
    pub fn new(slice_height: f64, samples_per_slice: usize) -> Result<Self, ConfigError> {
        let cfg = Self {
            slice_height,
            samples_per_slice,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.slice_height.is_finite() && self.slice_height > 0.0) {
            return Err(ConfigError::InvalidSliceHeight(self.slice_height));
        }
        if self.samples_per_slice == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }

    /// Validate against a concrete vertical extent and return the band count.
    pub fn bands_for(&self, extent: f64) -> Result<usize, ConfigError> {
        self.validate()?;
        // Compare in f64 first: the usize cast saturates for huge ratios.
        if extent / self.slice_height > MAX_BANDS as f64 {
            return Err(ConfigError::TooManyBands {
                extent,
                slice_height: self.slice_height,
                limit: MAX_BANDS,
            });
        }
        Ok(super::band_count(extent, self.slice_height))
    }
}
