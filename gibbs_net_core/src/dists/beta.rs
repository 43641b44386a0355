use statrs::function::gamma::gamma;

use super::Density;

const MIN_DENOM: f64 = 1e-15;

#[derive(Debug, Clone, Copy)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    pub fn new(alpha: f64, beta: f64) -> Beta {
        Beta { alpha, beta }
    }
}

impl Density for Beta {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        let mut denom = gamma(self.alpha) * gamma(self.beta);
        if denom.abs() < MIN_DENOM {
            denom = if denom < 0.0 { -MIN_DENOM } else { MIN_DENOM };
        }
        gamma(self.alpha + self.beta) / denom
            * x.powf(self.alpha - 1.0)
            * (1.0 - x).powf(self.beta - 1.0)
    }
}
