//! Seeded uniform random 3-SAT instances: core agreement and determinism.

use wren_sat::{config::Config, context::Context, reports::Report};
use wren_tests::{unanimous_report, uniform_random_3sat};

/// Twenty variables at the classic hard ratio of 4.25 clauses per variable.
fn instance(seed: u64) -> wren_sat::cnf::Cnf {
    uniform_random_3sat(20, 85, seed)
}

#[test]
fn cores_agree_across_seeds() {
    let mut satisfiable = 0;

    for seed in 0..16 {
        match unanimous_report(&instance(seed)) {
            Report::Satisfiable => satisfiable += 1,
            Report::Unsatisfiable => {}
            Report::Unknown => panic!("no budget was set"),
        }
    }

    // Instances this small lean satisfiable at the threshold ratio.
    assert!(satisfiable > 0);
}

#[test]
fn cores_agree_on_dense_instances() {
    // Far past the threshold ratio; models are rare or absent.
    for seed in 0..8 {
        unanimous_report(&uniform_random_3sat(20, 160, seed));
    }
}

#[test]
fn solves_are_deterministic() {
    for seed in [3, 7, 23] {
        let cnf = instance(seed);

        let mut first = Context::from_cnf(&cnf, Config::default());
        let first_report = first.solve();

        let mut second = Context::from_cnf(&cnf, Config::default());
        let second_report = second.solve();

        assert_eq!(first_report, second_report);
        assert_eq!(first.counters.decisions, second.counters.decisions);
        assert_eq!(first.counters.conflicts, second.counters.conflicts);
        assert_eq!(first.counters.propagations, second.counters.propagations);
        assert_eq!(first.counters.backjumps, second.counters.backjumps);
        assert_eq!(first.trail.assignments(), second.trail.assignments());
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(instance(11), instance(11));
    assert_ne!(instance(11), instance(12));
}
