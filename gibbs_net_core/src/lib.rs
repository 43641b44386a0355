//! Core functionality for the gibbs_net library
//!
//! A probabilistic graphical model made of categorical and continuous random
//! variables, sampled with a combined Gibbs/Metropolis-Hastings sweep.
//!
//! ```
//! use gibbs_net_core::Network;
//!
//! let mut net = Network::new(0);
//! let rain = net.new_cat(2).unwrap();
//! net.set_cpt_row(rain, 0, &[0.2, 0.8]).unwrap();
//!
//! let wet = net.new_cat(2).unwrap();
//! net.add_cat_parent(wet, rain).unwrap();
//! net.set_cpt_row(wet, 0, &[0.9, 0.1]).unwrap();
//! net.set_cpt_row(wet, 1, &[0.1, 0.9]).unwrap();
//! net.set_observed(wet, 0.0).unwrap();
//!
//! net.burn_in(100);
//! net.sample();
//! assert!(net.current_value(rain) < 2.0);
//! ```

// clippy lints config:
#![allow(unknown_lints)]

mod arena;
mod categorical;
mod config;
mod continuous;
pub mod dists;
mod error;
mod network;
mod node;
pub mod rng;
pub mod stats;

pub use self::arena::NodeId;
pub use self::error::{NetError, Result};
pub use self::network::{
    AlphaAndBeta, BetaNode, CatNode, ConstNode, ExponentialNode, GammaNode, Lambda, LogNormalNode,
    MeanAndDev, MinAndMax, Network, NormalNode, ParetoNode, PoissonNode, UniformContinuousNode,
    UniformDiscreteNode, VarNode,
};
pub use self::rng::{NetRng, Random};

/// Install `env_logger` at the level read from `GIBBS_NET_LOG_LEVEL`.
///
/// Networks never install a logger themselves. Once any logger is set,
/// further calls are no-ops.
pub fn init_logger() {
    config::tracing::Logger::get_logger();
}

/// Floor for log-probabilities, keeps `ln(0)` and `ln(<0)` out of the
/// acceptance ratio.
pub const MIN_LOG_PROB: f64 = -1e300;
