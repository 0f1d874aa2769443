//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;

use numena::root_finding::secant::{secant, SecantCfg, SecantError};
use numena::root_finding::{Degeneracy, Termination};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-10)?;

    let res = secant(f, 1.0, 2.0, cfg)?;

    assert!(res.success);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 2.0_f64.sqrt(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn both_seeds_are_recorded() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.iterations[0].index, 0);
    assert_eq!(res.iterations[1].index, 1);
    assert_eq!(res.iterations[0].error, None);
    assert_eq!(res.iterations.len(), res.iteration_count + 2);
    Ok(())
}

#[test]
fn coincident_seeds() {
    let f   = |x: f64| x * x - 2.0;
    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert_eq!(err, SecantError::CoincidentSeeds { x0: 1.0, x1: 1.0 });
}

#[test]
fn equal_values_stop_before_first_step() -> TestResult {
    // f(-1) == f(1), so the secant is horizontal
    let f   = |x: f64| x * x;
    let res = secant(f, -1.0, 1.0, SecantCfg::new())?;

    assert!(!res.success);
    assert_eq!(
        res.termination,
        Termination::Degenerate(Degeneracy::ZeroDenominator { x: 1.0, denominator: 0.0 })
    );
    assert_eq!(res.iteration_count, 0);
    assert_eq!(res.iterations.len(), 2);
    assert_eq!(res.root, None);
    Ok(())
}
