//! tests for truncated Taylor series
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI};

use approx::assert_abs_diff_eq;

use numena::taylor::{cos, sin, Series, TaylorCfg, TaylorError};
use numena::ErrorKind;

type TestResult = Result<(), TaylorError>;

#[test]
fn cos_of_sixty_degrees() -> TestResult {
    let r = cos(FRAC_PI_3, TaylorCfg::new())?;

    assert_eq!(r.series, Series::Cos);
    assert!(r.converged);
    assert_abs_diff_eq!(r.approximation, 0.5, epsilon = 1e-8);
    assert!(r.difference < 1e-8);
    assert_eq!(r.partial_sums.len(), r.terms_used);
    assert_eq!(r.errors.len(), r.terms_used - 1);
    assert_eq!(r.final_error, r.errors.last().copied());
    Ok(())
}

#[test]
fn sin_of_thirty_degrees() -> TestResult {
    let cfg = TaylorCfg::new().set_tolerance(1e-12)?;
    let r = sin(FRAC_PI_6, cfg)?;

    assert!(r.converged);
    assert_abs_diff_eq!(r.approximation, 0.5, epsilon = 1e-12);
    assert_eq!(r.partial_sums[0], FRAC_PI_6);
    Ok(())
}

#[test]
fn partial_sums_alternate_around_the_value() -> TestResult {
    let r = cos(PI, TaylorCfg::new())?;

    assert!(r.partial_sums[0] > -1.0);
    assert!(r.partial_sums[1] < -1.0);
    assert_abs_diff_eq!(r.approximation, -1.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn tighter_tolerance_uses_more_terms() -> TestResult {
    let loose = cos(2.0, TaylorCfg::new().set_tolerance(1e-3)?)?;
    let tight = cos(2.0, TaylorCfg::new().set_tolerance(1e-12)?)?;

    assert!(tight.terms_used > loose.terms_used);
    Ok(())
}

#[test]
fn term_cap_stops_early() -> TestResult {
    let r = sin(3.0, TaylorCfg::new().set_max_terms(3)?)?;

    assert!(!r.converged);
    assert_eq!(r.terms_used, 3);
    assert!(r.message.contains("tolerance not reached"));
    Ok(())
}

#[test]
fn relative_error_kind() -> TestResult {
    let cfg = TaylorCfg::new().set_error_kind(ErrorKind::Relative);
    let r = cos(1.0, cfg)?;

    assert_eq!(r.error_kind, ErrorKind::Relative);
    assert!(r.converged);
    Ok(())
}

#[test]
fn invalid_inputs() {
    assert_eq!(
        cos(f64::INFINITY, TaylorCfg::new()).unwrap_err(),
        TaylorError::NonFiniteTheta { got: f64::INFINITY }
    );
    assert!(TaylorCfg::new().set_tolerance(0.0).is_err());
    assert_eq!(
        TaylorCfg::new().set_max_terms(0).unwrap_err(),
        TaylorError::InvalidMaxTerms { got: 0 }
    );
}
