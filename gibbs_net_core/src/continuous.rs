//! Metropolis-Hastings engine shared by every parametric family.
//!
//! Each variable keeps a random-walk proposal whose deviation is re-estimated
//! from the chain history after every ten accepted moves.

use smallvec::SmallVec;

use crate::arena::{Arena, NodeId};
use crate::dists::Family;
use crate::node::{CondTable, Variable};
use crate::rng::Random;
use crate::MIN_LOG_PROB;

const RECALIBRATE_EVERY: u32 = 10;

#[derive(Debug)]
pub(crate) struct ContinuousSampler {
    family: Family,
    /// one row of `family.slots()` parameter nodes per parent configuration
    params: CondTable,
    current_mean: f64,
    current_deviation: f64,
    sample_count: u32,
    accepted_since_recalibration: u32,
    sum_of_values: f64,
    sum_of_squared_values: f64,
}

impl ContinuousSampler {
    pub fn new(
        family: Family,
        prior_mean: f64,
        prior_deviation: f64,
        default_param: NodeId,
    ) -> ContinuousSampler {
        ContinuousSampler {
            family,
            params: CondTable::new(family.slots(), default_param),
            current_mean: prior_mean,
            current_deviation: prior_deviation,
            sample_count: 0,
            accepted_since_recalibration: 0,
            sum_of_values: 0.0,
            sum_of_squared_values: 0.0,
        }
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    #[inline]
    pub fn current_mean(&self) -> f64 {
        self.current_mean
    }

    #[inline]
    pub fn set_current_mean(&mut self, val: f64) {
        self.current_mean = val;
    }

    #[inline]
    pub fn deviation(&self) -> f64 {
        self.current_deviation
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn table_mut(&mut self) -> &mut CondTable {
        &mut self.params
    }

    pub fn likelihood(&self, arena: &Arena, id: NodeId, x: f64) -> f64 {
        let params: SmallVec<[f64; 2]> = self
            .params
            .row(arena.current_cat_index(id))
            .iter()
            .map(|p| arena.current_value(*p))
            .collect();
        self.family.likelihood(x, &params)
    }

    /// Book-keeping after one Metropolis step.
    fn record(&mut self, accepted: bool) {
        if accepted {
            self.accepted_since_recalibration += 1;
            if self.accepted_since_recalibration >= RECALIBRATE_EVERY {
                let n = f64::from(self.sample_count);
                let mean = self.sum_of_values / n;
                let variance = self.sum_of_squared_values / n - mean * mean;
                self.current_deviation = variance.max(0.0).sqrt();
                self.accepted_since_recalibration = 0;
                log::trace!("proposal deviation set to {}", self.current_deviation);
            }
        }
        if self.sample_count < u32::MAX {
            self.sum_of_values += self.current_mean;
            self.sum_of_squared_values += self.current_mean * self.current_mean;
            self.sample_count += 1;
        }
    }
}

#[inline]
fn floored(log_prob: f64) -> Option<f64> {
    if log_prob > MIN_LOG_PROB {
        Some(log_prob)
    } else {
        None
    }
}

/// Log-probability of `x` under the variable's own distribution plus the
/// log-likelihood of every child given `x`, floored at `MIN_LOG_PROB`.
pub(crate) fn gibbs(arena: &mut Arena, id: NodeId, x: f64) -> f64 {
    let own = match floored(arena.likelihood(id, x).ln()) {
        Some(own) => own,
        None => return MIN_LOG_PROB,
    };
    let previous = arena[id].state_value();
    arena[id].set_state(x);
    let log_sum = children_log_likelihood(arena, id, own);
    arena[id].set_state(previous);
    log_sum
}

fn children_log_likelihood(arena: &Arena, id: NodeId, mut log_sum: f64) -> f64 {
    let var = match arena.variable(id) {
        Some(var) => var,
        None => return log_sum,
    };
    for child in &var.children {
        match floored(arena.likelihood(*child, arena.current_value(*child)).ln()) {
            Some(d) => log_sum += d,
            None => return MIN_LOG_PROB,
        }
    }
    log_sum
}

/// One random-walk proposal; returns whether it was accepted.
#[allow(clippy::float_cmp)]
pub(crate) fn metropolis<R: Random + ?Sized>(arena: &mut Arena, id: NodeId, rand: &mut R) -> bool {
    let (current, deviation, discrete) = match arena.variable(id).and_then(Variable::as_continuous)
    {
        Some(cont) => (
            cont.current_mean,
            cont.current_deviation,
            cont.family.is_discrete(),
        ),
        None => return false,
    };

    let mut candidate = rand.normal() * deviation + current;
    if discrete {
        candidate = (candidate + 0.5).floor();
    }
    if candidate == current {
        return false;
    }

    let cand_log = match floored(gibbs(arena, id, candidate)) {
        Some(log_prob) => log_prob,
        None => return false,
    };
    let curr_log = match floored(gibbs(arena, id, current)) {
        Some(log_prob) => log_prob,
        None => return false,
    };
    if rand.uniform().ln() < cand_log - curr_log {
        arena[id].set_state(candidate);
        true
    } else {
        false
    }
}

pub(crate) fn sample<R: Random + ?Sized>(arena: &mut Arena, id: NodeId, rand: &mut R) {
    let accepted = metropolis(arena, id, rand);
    if let Some(cont) = arena.variable_mut(id).and_then(Variable::as_continuous_mut) {
        cont.record(accepted);
    }
}
