use statrs::function::gamma::gamma;

use super::Density;

/// Gamma density with shape `alpha` and rate `beta`.
#[derive(Debug, Clone, Copy)]
pub struct Gamma {
    alpha: f64,
    rate: f64,
}

impl Gamma {
    pub fn with_rate(alpha: f64, rate: f64) -> Gamma {
        Gamma { alpha, rate }
    }

    pub fn with_scale(alpha: f64, scale: f64) -> Gamma {
        Gamma {
            alpha,
            rate: 1.0 / scale,
        }
    }
}

impl Density for Gamma {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.rate.powf(self.alpha) * x.powf(self.alpha - 1.0) * (-self.rate * x).exp()
            / gamma(self.alpha)
    }
}
