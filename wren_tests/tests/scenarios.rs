//! End-to-end scenarios over small formulas, through every core.

use wren_sat::{config::Config, context::Context, reports::Report, structures::literal::Literal};
use wren_tests::{cnf_of, unanimous_report};

#[test]
fn empty_formula() {
    let cnf = cnf_of("p cnf 0 0\n");

    assert_eq!(unanimous_report(&cnf), Report::Satisfiable);

    let ctx = Context::from_cnf(&cnf, Config::default());
    assert!(ctx.witness().is_empty());
}

#[test]
fn single_unit() {
    let cnf = cnf_of("p cnf 1 1\n1 0\n");

    assert_eq!(unanimous_report(&cnf), Report::Satisfiable);

    let mut ctx = Context::from_cnf(&cnf, Config::default());
    ctx.solve();
    assert_eq!(ctx.witness(), vec![Literal::new(1)]);
}

#[test]
fn clashing_units() {
    let cnf = cnf_of("p cnf 1 2\n1 0\n-1 0\n");

    assert_eq!(unanimous_report(&cnf), Report::Unsatisfiable);
}

#[test]
fn two_atoms_one_true() {
    let cnf = cnf_of("p cnf 2 2\n1 2 0\n-1 -2 0\n");

    assert_eq!(unanimous_report(&cnf), Report::Satisfiable);

    let mut ctx = Context::from_cnf(&cnf, Config::default());
    ctx.solve();
    assert_ne!(ctx.value_of(1), ctx.value_of(2));
}

#[test]
fn exit_codes() {
    assert_eq!(Report::Satisfiable.exit_code(), 10);
    assert_eq!(Report::Unsatisfiable.exit_code(), 20);
    assert_eq!(Report::Unknown.exit_code(), 0);
}

#[test]
fn conflict_limit_reports_unknown() {
    // PHP(3, 2) cannot be settled without conflicts.
    let cnf = wren_tests::pigeonhole(3, 2);
    let config = Config {
        conflict_limit: Some(0),
        ..Config::default()
    };

    let mut ctx = Context::from_cnf(&cnf, config);
    assert_eq!(ctx.solve(), Report::Unknown);

    // The search resumes once the budget is lifted.
    ctx.config.conflict_limit = None;
    assert_eq!(ctx.solve(), Report::Unsatisfiable);
}
