mod common;

use modexp_cost::{BenchConfig, BenchRng, Error, Harness, Rfc3526};

#[test]
fn same_seed_produces_identical_inputs() {
    common::init_tracing();

    let config = BenchConfig {
        mul_ops: 200,
        exp_ops: 20,
        seed: 42,
    };

    let mut rng1 = BenchRng::from_seed(config.seed);
    let first = Harness::new(common::small_group(), config.clone(), &mut rng1).unwrap();

    let mut rng2 = BenchRng::from_seed(config.seed);
    let second = Harness::new(common::small_group(), config, &mut rng2).unwrap();

    assert_eq!(first.inputs(), second.inputs());
}

#[test]
fn different_seeds_produce_different_inputs() {
    let config = BenchConfig {
        mul_ops: 10,
        exp_ops: 1,
        seed: 0,
    };

    let mut rng1 = BenchRng::from_seed(1);
    let first = Harness::new(common::small_group(), config.clone(), &mut rng1).unwrap();

    let mut rng2 = BenchRng::from_seed(2);
    let second = Harness::new(common::small_group(), config, &mut rng2).unwrap();

    assert_ne!(first.inputs(), second.inputs());
}

#[test]
fn production_group_inputs_are_deterministic() {
    let group = Rfc3526::modp_4096().unwrap();
    let config = BenchConfig {
        mul_ops: 4,
        exp_ops: 1,
        seed: 42,
    };

    let mut rng1 = BenchRng::from_seed(config.seed);
    let first = Harness::new(group.clone(), config.clone(), &mut rng1).unwrap();
    let mut rng2 = BenchRng::from_seed(config.seed);
    let second = Harness::new(group.clone(), config, &mut rng2).unwrap();

    assert_eq!(first.inputs(), second.inputs());
    for x in &first.inputs().a {
        assert!(x < group.order_bound());
    }
}

#[test]
fn exp_ops_above_mul_ops_is_rejected() {
    let config = BenchConfig {
        mul_ops: 100,
        exp_ops: 101,
        seed: 42,
    };
    let mut rng = BenchRng::from_seed(config.seed);

    let result = Harness::new(common::small_group(), config, &mut rng);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn small_group_run_completes() {
    common::init_tracing();

    let config = BenchConfig {
        mul_ops: 500,
        exp_ops: 50,
        seed: 7,
    };
    let mut rng = BenchRng::from_seed(config.seed);
    let harness = Harness::new(common::small_group(), config, &mut rng).unwrap();

    let report = harness.run();
    let output = report.to_string();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("multiplication: ") && lines[0].ends_with(" ns/op "));
    assert!(lines[1].starts_with("exponentiation: ") && lines[1].ends_with(" ns/op "));
    assert!(lines[2].starts_with("diferential factor: "));
}

#[test]
fn exponentiation_costs_more_than_multiplication() {
    common::init_tracing();

    let group = Rfc3526::modp_4096().unwrap();
    let config = BenchConfig {
        mul_ops: 200,
        exp_ops: 2,
        seed: 42,
    };
    let mut rng = BenchRng::from_seed(config.seed);
    let harness = Harness::new(group, config, &mut rng).unwrap();

    let report = harness.run();
    assert!(report.exp_ns_per_op > report.mul_ns_per_op);
    assert!(
        report.ratio() > 1.0,
        "differential factor was {}",
        report.ratio()
    );
}
