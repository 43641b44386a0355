//! Closed-form densities for the parametric families a continuous variable
//! can follow.
//!
//! Every density is total: arguments outside the support (or parameters that
//! make the density undefined) yield zero or a non-finite value, never a
//! panic, since the samplers take logarithms and floor them.

mod beta;
mod exponential;
mod gamma;
mod lognormal;
mod normal;
mod pareto;
mod poisson;
mod uniform;

pub use self::beta::Beta;
pub use self::exponential::Exponential;
pub use self::gamma::Gamma;
pub use self::lognormal::LogNormal;
pub use self::normal::Normal;
pub use self::pareto::Pareto;
pub use self::poisson::Poisson;
pub use self::uniform::{UniformContinuous, UniformDiscrete};

/// Density (or mass, for discrete families) of a fully parameterised
/// distribution.
pub trait Density {
    fn pdf(&self, x: f64) -> f64;
}

/// The family of a continuous variable; parameters are supplied per row of
/// its conditional table, in the order listed for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// mean, deviation
    Normal,
    /// mean, deviation
    LogNormal,
    /// alpha, m
    Pareto,
    /// min, max
    UniformDiscrete,
    /// min, max
    UniformContinuous,
    /// lambda
    Poisson,
    /// lambda
    Exponential,
    /// alpha, beta
    Beta,
    /// alpha, beta; `beta` is a scale instead of a rate when `scale` is set
    Gamma { scale: bool },
}

impl Family {
    /// Parameters per table row.
    pub fn slots(self) -> usize {
        match self {
            Family::Poisson | Family::Exponential => 1,
            _ => 2,
        }
    }

    /// Discrete families only take integer values.
    pub fn is_discrete(self) -> bool {
        matches!(self, Family::UniformDiscrete | Family::Poisson)
    }

    /// Evaluate the density at `x`; `params` holds `self.slots()` values.
    pub fn likelihood(self, x: f64, params: &[f64]) -> f64 {
        debug_assert_eq!(params.len(), self.slots());
        match self {
            Family::Normal => Normal::new(params[0], params[1]).pdf(x),
            Family::LogNormal => LogNormal::new(params[0], params[1]).pdf(x),
            Family::Pareto => Pareto::new(params[0], params[1]).pdf(x),
            Family::UniformDiscrete => UniformDiscrete::new(params[0], params[1]).pdf(x),
            Family::UniformContinuous => UniformContinuous::new(params[0], params[1]).pdf(x),
            Family::Poisson => Poisson::new(params[0]).pdf(x),
            Family::Exponential => Exponential::new(params[0]).pdf(x),
            Family::Beta => Beta::new(params[0], params[1]).pdf(x),
            Family::Gamma { scale: false } => Gamma::with_rate(params[0], params[1]).pdf(x),
            Family::Gamma { scale: true } => Gamma::with_scale(params[0], params[1]).pdf(x),
        }
    }
}
