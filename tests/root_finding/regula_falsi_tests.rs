//! tests for the regula falsi root finding algorithm
use approx::assert_abs_diff_eq;

use numena::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use numena::root_finding::{Degeneracy, Termination};
use numena::ErrorKind;

type TestResult = Result<(), RegulaFalsiError>;

#[test]
fn finds_cubic_root() -> TestResult {
    let f   = |x: f64| x.powi(3) - x - 2.0;
    let cfg = RegulaFalsiCfg::new().set_tolerance(1e-10)?;

    let res = regula_falsi(f, 1.0, 2.0, cfg)?;

    assert!(res.success);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 1.521_379_706_8, epsilon = 1e-8);
    Ok(())
}

#[test]
fn relative_error_kind() -> TestResult {
    let f   = |x: f64| x * x - 3.0;
    let cfg = RegulaFalsiCfg::new()
        .set_tolerance(1e-9)?
        .set_error_kind(ErrorKind::Relative);

    let res = regula_falsi(f, 1.0, 2.0, cfg)?;

    assert!(res.success);
    assert_eq!(res.error_kind, ErrorKind::Relative);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 3.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn residual_stop() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = RegulaFalsiCfg::new().set_tolerance(1e-15)?.set_abs_fx(1e-6)?;

    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::ResidualReached);
    assert!(res.f_root.is_some_and(|fx| fx.abs() <= 1e-6));
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let res = regula_falsi(f, -1.0, 1.0, RegulaFalsiCfg::new())?;

    assert!(!res.success);
    assert!(matches!(
        res.termination,
        Termination::Degenerate(Degeneracy::NoSignChange { .. })
    ));
    Ok(())
}

#[test]
fn reversed_bounds() {
    let f = |x: f64| x;
    assert!(regula_falsi(f, 2.0, 1.0, RegulaFalsiCfg::new()).is_err());
}
