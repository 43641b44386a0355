use super::Density;

const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

#[derive(Debug, Clone, Copy)]
pub struct Normal {
    mean: f64,
    dev: f64,
}

impl Normal {
    pub fn new(mean: f64, dev: f64) -> Normal {
        Normal { mean, dev }
    }
}

impl Density for Normal {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        let t = x - self.mean;
        1.0 / (self.dev * SQRT_2PI) * (-(t * t) / (2.0 * self.dev * self.dev)).exp()
    }
}
