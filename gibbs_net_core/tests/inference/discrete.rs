use gibbs_net_core::stats::CategoryTally;
use gibbs_net_core::{CatNode, Network};

use super::{tally, BURN_IN};

#[test]
fn two_node_chain() {
    let mut net = Network::new(11);
    let parent = net.new_cat(2).unwrap();
    net.set_cpt_row(parent, 0, &[0.4, 0.6]).unwrap();

    let child = net.new_normal(1.0, 3.0);
    net.add_cat_parent(child, parent).unwrap();
    let (m0, d0) = (net.new_const(0.0), net.new_const(1.0));
    let (m1, d1) = (net.new_const(3.0), net.new_const(2.0));
    net.set_mean_and_dev(child, 0, m0, d0).unwrap();
    net.set_mean_and_dev(child, 1, m1, d1).unwrap();
    net.set_observed(child, 1.0).unwrap();

    let tally = tally(&mut net, parent, 2, 4_000_000);
    assert!((tally.frequency(0) - 0.571_428_6).abs() < 0.001);
    assert_eq!(net.current_value(child), 1.0);
}

#[test]
fn three_node_chain() {
    let mut net = Network::new(5);
    let a = net.new_cat(2).unwrap();
    net.set_cpt_row(a, 0, &[2.0 / 5.0, 3.0 / 5.0]).unwrap();

    let b = net.new_cat(2).unwrap();
    net.add_cat_parent(b, a).unwrap();
    net.set_cpt_row(b, 0, &[2.0 / 3.0, 1.0 / 3.0]).unwrap();
    net.set_cpt_row(b, 1, &[3.0 / 7.0, 4.0 / 7.0]).unwrap();

    let c = net.new_cat(2).unwrap();
    net.add_cat_parent(c, b).unwrap();
    net.set_cpt_row(c, 0, &[1.0 / 2.0, 1.0 / 2.0]).unwrap();
    net.set_cpt_row(c, 1, &[1.0 / 3.0, 2.0 / 3.0]).unwrap();

    net.set_observed(a, 0.0).unwrap();
    net.set_observed(c, 0.0).unwrap();

    let tally = tally(&mut net, b, 2, 400_000);
    assert!((tally.frequency(0) - 0.75).abs() < 0.005);
}

struct Alarm {
    burglary: CatNode,
    earthquake: CatNode,
    alarm: CatNode,
    john_calls: CatNode,
    mary_calls: CatNode,
}

fn alarm_network(net: &mut Network) -> Alarm {
    let burglary = net.new_cat(2).unwrap();
    net.set_cpt_row(burglary, 0, &[0.001, 0.999]).unwrap();
    let earthquake = net.new_cat(2).unwrap();
    net.set_cpt_row(earthquake, 0, &[0.002, 0.998]).unwrap();

    let alarm = net.new_cat(2).unwrap();
    net.add_cat_parent(alarm, burglary).unwrap();
    net.add_cat_parent(alarm, earthquake).unwrap();
    // row = burglary + 2 * earthquake
    net.set_cpt_row(alarm, 0, &[0.95, 0.05]).unwrap();
    net.set_cpt_row(alarm, 1, &[0.29, 0.71]).unwrap();
    net.set_cpt_row(alarm, 2, &[0.94, 0.06]).unwrap();
    net.set_cpt_row(alarm, 3, &[0.001, 0.999]).unwrap();

    let john_calls = net.new_cat(2).unwrap();
    net.add_cat_parent(john_calls, alarm).unwrap();
    net.set_cpt_row(john_calls, 0, &[0.9, 0.1]).unwrap();
    net.set_cpt_row(john_calls, 1, &[0.05, 0.95]).unwrap();

    let mary_calls = net.new_cat(2).unwrap();
    net.add_cat_parent(mary_calls, alarm).unwrap();
    net.set_cpt_row(mary_calls, 0, &[0.7, 0.3]).unwrap();
    net.set_cpt_row(mary_calls, 1, &[0.01, 0.99]).unwrap();

    Alarm {
        burglary,
        earthquake,
        alarm,
        john_calls,
        mary_calls,
    }
}

#[test]
fn burglar_alarm() {
    let mut net = Network::new(2);
    let model = alarm_network(&mut net);
    assert_eq!(net.cat_count(model.alarm), 4);
    net.set_observed(model.john_calls, 0.0).unwrap();
    net.set_observed(model.mary_calls, 0.0).unwrap();

    net.burn_in(BURN_IN);
    let mut burglary = CategoryTally::new(2);
    let mut earthquake = CategoryTally::new(2);
    let mut alarm = CategoryTally::new(2);
    for _ in 0..2_000_000 {
        net.sample();
        burglary.record(net.current_value(model.burglary));
        earthquake.record(net.current_value(model.earthquake));
        alarm.record(net.current_value(model.alarm));
    }
    assert!((burglary.frequency(0) - 0.284).abs() < 0.005);
    assert!((earthquake.frequency(0) - 0.176).abs() < 0.005);
    assert!((alarm.frequency(0) - 0.761).abs() < 0.005);
}

#[test]
fn unobserved_alarm_follows_the_prior() {
    let mut net = Network::new(9);
    let model = alarm_network(&mut net);
    // P(alarm) = 0.0025 without evidence, so P(john calls) = 0.9 * 0.0025 + 0.05 * 0.9975
    let tally = tally(&mut net, model.john_calls, 2, 400_000);
    assert!((tally.frequency(0) - 0.052_1).abs() < 0.003);
}

#[test]
fn evidence_stays_frozen() {
    let mut net = Network::new(3);
    let model = alarm_network(&mut net);
    net.set_observed(model.alarm, 1.0).unwrap();
    net.set_observed(model.burglary, 0.0).unwrap();
    for _ in 0..5_000 {
        net.sample();
        assert_eq!(net.current_value(model.alarm), 1.0);
        assert_eq!(net.current_value(model.burglary), 0.0);
        assert!(net.current_value(model.earthquake) < 2.0);
    }
    assert!(!net.is_observed(model.earthquake));
}

#[test]
fn wider_tables() {
    // a single table row wider than the binary networks above
    let mut net = Network::new(21);
    let die = net.new_cat(12).unwrap();
    let weights: Vec<f64> = (1..=12u8).map(f64::from).collect();
    net.set_cpt_row(die, 0, &weights).unwrap();
    let tally = tally(&mut net, die, 12, 312_000);
    for (cat, w) in weights.iter().enumerate() {
        assert!((tally.frequency(cat) - w / 78.0).abs() < 0.004);
    }
}

#[test]
fn build_and_drop_many_networks() {
    for seed in 0..200 {
        let mut net = Network::new(seed);
        let root = net.new_cat(3).unwrap();
        let mut last = root;
        for _ in 0..100 {
            let node = net.new_cat(3).unwrap();
            net.add_cat_parent(node, last).unwrap();
            for row in 0..3 {
                net.set_cpt_row(node, row, &[1.0, 2.0, 3.0]).unwrap();
            }
            last = node;
        }
        assert_eq!(net.len(), 101);
        net.sample();
    }
}
