use arbitrary::Unstructured;
use float_cmp::approx_eq;
use rand::Rng;

use gibbs_net_core::dists::Family;
use gibbs_net_core::{NetRng, Network, Random};

fn raw_sample(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn cpt_likelihood_is_normalized_weight() {
    let sample = raw_sample(64 * 1024);
    let mut unstr = Unstructured::new(&sample);
    for _ in 0..500 {
        let categories: usize = unstr.int_in_range(2..=9).unwrap();
        let weights: Vec<f64> = (0..categories)
            .map(|_| f64::from(unstr.arbitrary::<u8>().unwrap() % 11) - 2.0)
            .collect();

        let mut net = Network::new(0);
        let cat = net.new_cat(categories).unwrap();
        net.set_cpt_row(cat, 0, &weights).unwrap();

        let sum: f64 = weights.iter().sum();
        for (x, w) in weights.iter().enumerate() {
            let got = net.likelihood(cat, x as f64);
            if *w > 0.0 && sum > 0.0 {
                assert_eq!(got, w / sum);
            } else {
                assert_eq!(got, 0.0);
            }
        }
        assert_eq!(net.likelihood(cat, categories as f64), 0.0);
    }
}

#[test]
fn observations_survive_sweeps() {
    let sample = raw_sample(4 * 1024);
    let mut unstr = Unstructured::new(&sample);
    let mut net = Network::new(1);

    let cat = net.new_cat(4).unwrap();
    let normal = net.new_normal(0.0, 1.0);
    let poisson = net.new_poisson(2.0, 1.0);
    let gamma = net.new_gamma(1.0, 1.0, true);
    net.add_cat_parent(normal, cat).unwrap();

    let cat_val = f64::from(unstr.int_in_range(0..=3u8).unwrap());
    let normal_val = f64::from(unstr.arbitrary::<i16>().unwrap()) / 100.0;
    let poisson_val = f64::from(unstr.arbitrary::<u8>().unwrap());
    net.set_observed(cat, cat_val).unwrap();
    net.set_observed(normal, normal_val).unwrap();
    net.set_observed(poisson, poisson_val).unwrap();
    net.set_observed(gamma, -1.0).unwrap();

    for _ in 0..1_000 {
        net.sample();
        assert_eq!(net.current_value(cat), cat_val);
        assert_eq!(net.current_value(normal), normal_val);
        assert_eq!(net.current_value(poisson), poisson_val);
        assert_eq!(net.current_value(gamma), -1.0);
    }
    assert_eq!(net.current_cat_index(normal), cat_val as usize);
    assert_eq!(net.sample_count(normal), Some(0));
}

#[test]
fn child_likelihood_reads_parameter_nodes() {
    let mut net = Network::new(0);
    let mean = net.new_normal(0.5, 1.0);
    let dev = net.new_const(2.0);
    let child = net.new_normal(0.0, 1.0);
    net.set_mean_and_dev(child, 0, mean, dev).unwrap();

    let got = net.likelihood(child, 1.5);
    let expected = (-0.125f64).exp() / (2.0 * (2.0 * std::f64::consts::PI).sqrt());
    assert!(approx_eq!(f64, got, expected, ulps = 8));
    assert_eq!(net.family(child), Some(Family::Normal));

    net.set_observed(mean, 1.5).unwrap();
    let peak = net.likelihood(child, 1.5);
    assert!(approx_eq!(f64, peak, Family::Normal.likelihood(0.0, &[0.0, 2.0]), ulps = 2));
}

/// Counts the draws a sweep asks for.
struct CountingRng {
    inner: NetRng,
    uniforms: usize,
    normals: usize,
}

impl Random for CountingRng {
    fn uniform(&mut self) -> f64 {
        self.uniforms += 1;
        self.inner.uniform()
    }

    fn normal(&mut self) -> f64 {
        self.normals += 1;
        self.inner.normal()
    }

    fn next(&mut self, n: u64) -> u64 {
        self.inner.next(n)
    }
}

#[test]
fn sweeps_visit_every_variable_once() {
    let mut net = Network::with_rng(CountingRng {
        inner: NetRng::new(4),
        uniforms: 0,
        normals: 0,
    });
    let a = net.new_cat(2).unwrap();
    let b = net.new_cat(3).unwrap();
    net.add_cat_parent(b, a).unwrap();
    let observed = net.new_cat(2).unwrap();
    net.set_observed(observed, 1.0).unwrap();
    let x = net.new_normal(0.0, 1.0);
    assert_eq!(net.len(), 4);

    for _ in 0..100 {
        net.sample();
    }
    // one uniform per categorical draw, one normal per proposal
    assert_eq!(net.rng_mut().normals, 100);
    assert!(net.rng_mut().uniforms >= 200);
    assert!(net.rng_mut().uniforms <= 300);
    assert_eq!(net.sample_count(x), Some(100));
}

#[test]
fn hosts_keep_control_of_logging() {
    let mut net = Network::new(0);
    let cat = net.new_cat(2).unwrap();
    net.burn_in(10);
    assert!(net.current_value(cat) < 2.0);
    assert!(env_logger::builder().is_test(true).try_init().is_ok());
}
