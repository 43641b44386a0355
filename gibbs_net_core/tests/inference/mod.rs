mod discrete;
mod properties;

use gibbs_net_core::stats::{CategoryTally, RunningMean};
use gibbs_net_core::{Network, NodeId};

const BURN_IN: usize = 10_000;

/// Burn in, then tally the categories visited by `node` over `sweeps` sweeps.
fn tally<N: Into<NodeId> + Copy>(
    net: &mut Network,
    node: N,
    categories: usize,
    sweeps: usize,
) -> CategoryTally {
    net.burn_in(BURN_IN);
    let mut tally = CategoryTally::new(categories);
    for _ in 0..sweeps {
        net.sample();
        tally.record(net.current_value(node));
    }
    tally
}

/// Burn in, then accumulate the values taken by `node` over `sweeps` sweeps.
fn running_mean<N: Into<NodeId> + Copy>(net: &mut Network, node: N, sweeps: usize) -> RunningMean {
    net.burn_in(BURN_IN);
    let mut acc = RunningMean::new();
    for _ in 0..sweeps {
        net.sample();
        acc.push(net.current_value(node));
    }
    acc
}
