//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;

use numena::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use numena::root_finding::errors::RootFindingError;
use numena::root_finding::{Degeneracy, Termination};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-8)?;

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!(res.success);
    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 2.0_f64.sqrt(), epsilon = 1e-7);
    assert!(res.final_error.is_some_and(|e| e < 1e-8));
    Ok(())
}

#[test]
fn first_row_has_no_error() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.iterations[0].index, 1);
    assert_eq!(res.iterations[0].error, None);
    assert_eq!(res.iterations[0].value("xm"), Some(1.0));
    assert!(res.iterations[1].error.is_some());
    Ok(())
}

#[test]
fn bracket_keeps_the_sign_change() -> TestResult {
    let f   = |x: f64| x.powi(3) - x - 2.0;
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new())?;

    let [a, b] = res.bracket.unwrap_or([f64::NAN; 2]);
    assert!(f(a) * f(b) <= 0.0);
    assert!(a < b);
    Ok(())
}

#[test]
fn no_sign_change_is_degenerate() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let res = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert!(!res.success);
    assert!(res.root.is_none());
    assert!(res.iterations.is_empty());
    assert!(matches!(
        res.termination,
        Termination::Degenerate(Degeneracy::NoSignChange { .. })
    ));
    Ok(())
}

#[test]
fn midpoint_exact_root() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(1.0));
    assert_eq!(res.iteration_count, 1);
    assert_eq!(res.final_error, Some(0.0));
    Ok(())
}

#[test]
fn bound_exact_root() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(2.0));
    assert_eq!(res.iteration_count, 0);
    Ok(())
}

#[test]
fn reversed_bounds() {
    let f   = |x: f64| x;
    let err = bisection(f, 1.0, -1.0, BisectionCfg::new()).unwrap_err();

    assert_eq!(
        err,
        BisectionError::RootFinding(RootFindingError::InvalidBounds { a: 1.0, b: -1.0 })
    );
}

#[test]
fn non_finite_bound_evaluation() {
    let f   = |x: f64| x.ln();
    let err = bisection(f, 0.0, 2.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { .. })
    ));
}

#[test]
fn iteration_limit() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-15)?.set_max_iter(5)?;

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!(!res.success);
    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iteration_count, 5);
    assert_eq!(res.iterations.len(), 5);
    assert!(res.root.is_some());
    Ok(())
}

#[test]
fn invalid_tolerance() {
    assert!(BisectionCfg::new().set_tolerance(0.0).is_err());
    assert!(BisectionCfg::new().set_tolerance(f64::NAN).is_err());
    assert!(BisectionCfg::new().set_max_iter(0).is_err());
}
