use statrs::function::gamma::gamma;

use super::Density;

#[derive(Debug, Clone, Copy)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    pub fn new(lambda: f64) -> Poisson {
        Poisson { lambda }
    }
}

impl Density for Poisson {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.lambda.powf(x) * (-self.lambda).exp() / gamma(x + 1.0)
    }
}
