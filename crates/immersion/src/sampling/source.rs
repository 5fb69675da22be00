use rand::rngs::StdRng;
use rand::Rng;

/// Injectable source of uniform reals.
///
/// Production code uses a seeded `StdRng`; tests can plug in deterministic
/// stubs (grids, constant sequences) to make estimates exact.
pub trait UniformSource {
    /// Uniform draw from `[lo, hi)`. Returns `lo` when the interval is empty.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl UniformSource for StdRng {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo {
            self.gen_range(lo..hi)
        } else {
            lo
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }
}
