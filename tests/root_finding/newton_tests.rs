//! tests for the newton-raphson root finding algorithm
use approx::assert_abs_diff_eq;

use numena::root_finding::newton::{newton, NewtonCfg, NewtonError};
use numena::root_finding::{Degeneracy, Precision, Termination};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tolerance(1e-8)?;

    let res = newton(f, df, 1.0, cfg)?;

    assert!(res.success);
    assert!(res.iteration_count <= 10);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn zero_derivative_is_degenerate() -> TestResult {
    let f   = |x: f64| x * x - 1.0;
    let df  = |x: f64| 2.0 * x;
    let res = newton(f, df, 0.0, NewtonCfg::new())?;

    assert!(!res.success);
    assert_eq!(res.iteration_count, 0);
    assert!(matches!(
        res.termination,
        Termination::Degenerate(Degeneracy::ZeroDerivative { .. })
    ));
    assert_eq!(res.iterations.len(), 1);
    Ok(())
}

#[test]
fn display_precision_formats_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new()
        .set_tolerance(1e-10)?
        .set_precision(Precision::Decimals(4))?;

    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.formatted_root.as_deref(), Some("1.4142"));
    assert!(res.message.contains("1.4142"));
    Ok(())
}

#[test]
fn precision_out_of_range() {
    assert!(NewtonCfg::new().set_precision(Precision::Significant(0)).is_err());
    assert!(NewtonCfg::new().set_precision(Precision::Decimals(40)).is_err());
}

#[test]
fn seed_is_exact_root() -> TestResult {
    let f   = |x: f64| x - 3.0;
    let df  = |_: f64| 1.0;
    let res = newton(f, df, 3.0, NewtonCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.iteration_count, 0);
    Ok(())
}

#[test]
fn non_finite_derivative() {
    let f   = |x: f64| x;
    let df  = |_: f64| f64::NAN;
    let err = newton(f, df, 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { .. }));
}
