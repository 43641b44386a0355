use super::Density;

/// Uniform over the integers in `[ceil(min), floor(max)]`.
#[derive(Debug, Clone, Copy)]
pub struct UniformDiscrete {
    min: f64,
    max: f64,
}

impl UniformDiscrete {
    pub fn new(min: f64, max: f64) -> UniformDiscrete {
        UniformDiscrete {
            min: min.ceil(),
            max: max.floor(),
        }
    }
}

impl Density for UniformDiscrete {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x < self.min || x > self.max {
            return 0.0;
        }
        1.0 / (self.max - self.min + 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UniformContinuous {
    min: f64,
    max: f64,
}

impl UniformContinuous {
    pub fn new(min: f64, max: f64) -> UniformContinuous {
        UniformContinuous { min, max }
    }
}

impl Density for UniformContinuous {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        if x < self.min || x > self.max {
            return 0.0;
        }
        1.0 / (self.max - self.min)
    }
}
