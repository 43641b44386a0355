use super::Density;

const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// Log-normal density with the location subtracted inside the logarithm,
/// `1/(x dev sqrt(2pi)) exp(-ln(x - mean)^2 / (2 dev^2))`.
///
/// Only for `mean == 0` is this the textbook log-normal; for other means the
/// `1/x` factor is left unshifted and the density does not integrate to one.
#[derive(Debug, Clone, Copy)]
pub struct LogNormal {
    mean: f64,
    dev: f64,
}

impl LogNormal {
    pub fn new(mean: f64, dev: f64) -> LogNormal {
        LogNormal { mean, dev }
    }
}

impl Density for LogNormal {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        let t = (x - self.mean).ln();
        1.0 / (x * self.dev * SQRT_2PI) * (-(t * t) / (2.0 * self.dev * self.dev)).exp()
    }
}
