//! Top-down band enumeration over a region's vertical extent.
//!
//! Model
//! - Band `k` spans `[max_y − (k+1)·h, max_y − k·h]` horizontally across
//!   `[min_x, max_x]`, with `h = slice_height`.
//! - Bands continue while the band bottom is above `min_y − h`, i.e. the last
//!   band may overshoot `min_y` by less than one slice. Exterior samples are
//!   rejected by membership, so the overshoot wastes samples but adds no bias.
//! - Bottoms are computed from the band index rather than by repeated
//!   subtraction, so extents that are (numerically) a multiple of `h` yield
//!   exactly `extent / h` bands.
//!
//! Code cross-refs: `SliceCfg`, `Band`, `Slicer`, `sampling::BandEstimator`.

mod cfg;

pub use cfg::{SliceCfg, MAX_BANDS};

use crate::geom2::BoundingBox;
use cfg::SNAP_EPS;

/// One horizontal strip. Ephemeral: produced by `Slicer`, consumed by the estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Position from the top (0 = topmost band).
    pub index: usize,
    pub bottom: f64,
    pub top: f64,
    pub min_x: f64,
    pub max_x: f64,
}

impl Band {
    /// Sampling rectangle `[min_x, max_x] × [bottom, top]`.
    #[inline]
    pub fn rect(&self) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x,
            min_y: self.bottom,
            max_x: self.max_x,
            max_y: self.top,
        }
    }
}

/// Number of bands needed to cover `extent` with bands of height `h`.
///
/// Zero for a flat (or inverted) extent; otherwise `ceil(extent / h)`, snapping
/// ratios within `SNAP_EPS` (relative) of an integer down to that integer.
pub fn band_count(extent: f64, h: f64) -> usize {
    if !(extent > 0.0) || !(h > 0.0) {
        return 0;
    }
    let ratio = extent / h;
    let nearest = ratio.round();
    let n = if (ratio - nearest).abs() <= SNAP_EPS * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    (n as usize).max(1)
}

/// Iterator over the bands of a bounding box, topmost first.
#[derive(Clone, Debug)]
pub struct Slicer {
    bounds: BoundingBox,
    h: f64,
    count: usize,
    next: usize,
}

impl Slicer {
    pub fn new(bounds: BoundingBox, cfg: &SliceCfg) -> Self {
        Self {
            bounds,
            h: cfg.slice_height,
            count: band_count(bounds.height(), cfg.slice_height),
            next: 0,
        }
    }

    /// Total number of bands this slicer yields.
    #[inline]
    pub fn band_count(&self) -> usize {
        self.count
    }

    /// Depth covered by all bands (`count · h`), measured from `max_y`.
    #[inline]
    pub fn covered_depth(&self) -> f64 {
        (self.count as f64) * self.h
    }

    fn band(&self, k: usize) -> Band {
        let top = self.bounds.max_y - (k as f64) * self.h;
        Band {
            index: k,
            bottom: self.bounds.max_y - ((k + 1) as f64) * self.h,
            top,
            min_x: self.bounds.min_x,
            max_x: self.bounds.max_x,
        }
    }
}

impl Iterator for Slicer {
    type Item = Band;

    fn next(&mut self) -> Option<Band> {
        if self.next >= self.count {
            return None;
        }
        let b = self.band(self.next);
        self.next += 1;
        Some(b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Slicer {}
