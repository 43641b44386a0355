use super::Density;

#[derive(Debug, Clone, Copy)]
pub struct Pareto {
    alpha: f64,
    m: f64,
}

impl Pareto {
    pub fn new(alpha: f64, m: f64) -> Pareto {
        Pareto { alpha, m }
    }
}

impl Density for Pareto {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x < self.m {
            return 0.0;
        }
        self.alpha * self.m.powf(self.alpha) / x.powf(self.alpha + 1.0)
    }
}
