//! gibbs_net
//!
//! Runs the reference networks and prints the estimated posteriors.

use std::convert::TryFrom;
use std::error::Error;
use std::str::FromStr;

use gibbs_net_core::stats::CategoryTally;
use gibbs_net_core::{CatNode, NetError, Network};

const DEFAULT_BURN_IN: usize = 10_000;
const DEFAULT_SWEEPS: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Model {
    Simple,
    Three,
    Alarm,
    All,
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Model, String> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Model::Simple),
            "three" => Ok(Model::Three),
            "alarm" => Ok(Model::Alarm),
            "all" => Ok(Model::All),
            other => Err(format!("unknown model `{}`", other)),
        }
    }
}

struct Settings {
    burn_in: usize,
    sweeps: usize,
    seed: u64,
    model: Model,
}

impl Settings {
    fn load_conf() -> Result<Settings, Box<dyn Error>> {
        let mut settings = config::Config::new();
        settings.merge(config::Environment::with_prefix("GIBBS_NET"))?;

        let count = |key: &str, default: usize| -> Result<usize, Box<dyn Error>> {
            match settings.get_int(key) {
                Ok(val) => Ok(usize::try_from(val)?),
                Err(config::ConfigError::NotFound(_)) => Ok(default),
                Err(err) => Err(err.into()),
            }
        };
        let burn_in = count("burn_in", DEFAULT_BURN_IN)?;
        let sweeps = count("sweeps", DEFAULT_SWEEPS)?;
        let seed = count("seed", 0)? as u64;
        let model = settings
            .get_str("model")
            .unwrap_or_else(|_| "all".to_owned())
            .parse::<Model>()?;

        Ok(Settings {
            burn_in,
            sweeps,
            seed,
            model,
        })
    }
}

/// Estimate `P(node == 0)` for each of `nodes` after burn-in.
fn estimate(net: &mut Network, nodes: &[CatNode], settings: &Settings) -> Vec<f64> {
    net.burn_in(settings.burn_in);
    let mut tallies: Vec<_> = nodes
        .iter()
        .map(|n| CategoryTally::new(net.categories(*n)))
        .collect();
    for _ in 0..settings.sweeps {
        net.sample();
        for (node, tally) in nodes.iter().zip(tallies.iter_mut()) {
            tally.record(net.current_value(*node));
        }
    }
    tallies.iter().map(|t| t.frequency(0)).collect()
}

fn simple(settings: &Settings) -> Result<(), NetError> {
    let mut net = Network::new(settings.seed);
    let parent = net.new_cat(2)?;
    net.set_cpt_row(parent, 0, &[0.4, 0.6])?;

    let child = net.new_normal(1.0, 3.0);
    net.add_cat_parent(child, parent)?;
    let (m0, d0) = (net.new_const(0.0), net.new_const(1.0));
    let (m1, d1) = (net.new_const(3.0), net.new_const(2.0));
    net.set_mean_and_dev(child, 0, m0, d0)?;
    net.set_mean_and_dev(child, 1, m1, d1)?;
    net.set_observed(child, 1.0)?;

    let p = estimate(&mut net, &[parent], settings);
    println!("simple: P(parent=0 | child=1.0) = {:.6}  (exact 0.571429)", p[0]);
    Ok(())
}

fn three(settings: &Settings) -> Result<(), NetError> {
    let mut net = Network::new(settings.seed);
    let a = net.new_cat(2)?;
    net.set_cpt_row(a, 0, &[2.0 / 5.0, 3.0 / 5.0])?;

    let b = net.new_cat(2)?;
    net.add_cat_parent(b, a)?;
    net.set_cpt_row(b, 0, &[2.0 / 3.0, 1.0 / 3.0])?;
    net.set_cpt_row(b, 1, &[3.0 / 7.0, 4.0 / 7.0])?;

    let c = net.new_cat(2)?;
    net.add_cat_parent(c, b)?;
    net.set_cpt_row(c, 0, &[1.0 / 2.0, 1.0 / 2.0])?;
    net.set_cpt_row(c, 1, &[1.0 / 3.0, 2.0 / 3.0])?;

    net.set_observed(a, 0.0)?;
    net.set_observed(c, 0.0)?;

    let p = estimate(&mut net, &[b], settings);
    println!("three: P(B=0 | A=0, C=0) = {:.6}  (exact 0.75)", p[0]);
    Ok(())
}

fn alarm(settings: &Settings) -> Result<(), NetError> {
    let mut net = Network::new(settings.seed);
    let burglary = net.new_cat(2)?;
    net.set_cpt_row(burglary, 0, &[0.001, 0.999])?;
    let earthquake = net.new_cat(2)?;
    net.set_cpt_row(earthquake, 0, &[0.002, 0.998])?;

    let alarm = net.new_cat(2)?;
    net.add_cat_parent(alarm, burglary)?;
    net.add_cat_parent(alarm, earthquake)?;
    net.set_cpt_row(alarm, 0, &[0.95, 0.05])?;
    net.set_cpt_row(alarm, 1, &[0.29, 0.71])?;
    net.set_cpt_row(alarm, 2, &[0.94, 0.06])?;
    net.set_cpt_row(alarm, 3, &[0.001, 0.999])?;

    let john_calls = net.new_cat(2)?;
    net.add_cat_parent(john_calls, alarm)?;
    net.set_cpt_row(john_calls, 0, &[0.9, 0.1])?;
    net.set_cpt_row(john_calls, 1, &[0.05, 0.95])?;

    let mary_calls = net.new_cat(2)?;
    net.add_cat_parent(mary_calls, alarm)?;
    net.set_cpt_row(mary_calls, 0, &[0.7, 0.3])?;
    net.set_cpt_row(mary_calls, 1, &[0.01, 0.99])?;

    net.set_observed(john_calls, 0.0)?;
    net.set_observed(mary_calls, 0.0)?;

    let p = estimate(&mut net, &[burglary, earthquake, alarm], settings);
    println!("alarm: P(burglary | john, mary) = {:.6}  (exact 0.284)", p[0]);
    println!("alarm: P(earthquake | john, mary) = {:.6}  (exact 0.176)", p[1]);
    println!("alarm: P(alarm | john, mary) = {:.6}  (exact 0.761)", p[2]);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    gibbs_net_core::init_logger();

    let settings = Settings::load_conf()?;
    log::info!(
        "model {:?}, {} burn-in sweeps, {} measured sweeps, seed {}",
        settings.model,
        settings.burn_in,
        settings.sweeps,
        settings.seed
    );

    if let Model::Simple | Model::All = settings.model {
        simple(&settings)?;
    }
    if let Model::Three | Model::All = settings.model {
        three(&settings)?;
    }
    if let Model::Alarm | Model::All = settings.model {
        alarm(&settings)?;
    }
    Ok(())
}
