//! tests for vandermonde (and least-squares) polynomial interpolation
use approx::assert_abs_diff_eq;

use numena::interpolation::vandermonde::{interpolate, VandermondeCfg};
use numena::interpolation::{Algorithm, InterpolationError, Interpolator};

type TestResult = Result<(), InterpolationError>;

#[test]
fn passes_through_nodes() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 0.0, 5.0];

    let cfg = VandermondeCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x)?;
    let res = interpolate(cfg)?;

    assert_eq!(res.algorithm, Algorithm::Vandermonde);
    assert_eq!(res.n_provided, 4);
    for (got, want) in res.evaluated.iter().zip(y) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn recovers_quadratic() -> TestResult {
    // 2x² - 3x + 1
    let x = [-1.0, 0.5, 2.0];
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v * v - 3.0 * v + 1.0).collect();

    let cfg = VandermondeCfg::new().set_x(&x)?.set_y(&y)?;
    let res = interpolate(cfg)?;

    let p = res.interpolant.as_polynomial().map(|p| p.coefficients().to_vec()).unwrap_or_default();
    assert_eq!(p.len(), 3);
    assert_abs_diff_eq!(p[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p[1], -3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p[2], 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn least_squares_line() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 3.0, 5.0, 7.0, 9.0];

    let cfg = VandermondeCfg::new().set_x(&x)?.set_y(&y)?.set_degree(1)?;
    let res = interpolate(cfg)?;

    let p = res.interpolant.as_polynomial().map(|p| p.coefficients().to_vec()).unwrap_or_default();
    assert_eq!(p.len(), 2);
    assert_abs_diff_eq!(p[0], 2.0, epsilon = 1e-10);
    assert_abs_diff_eq!(p[1], 1.0, epsilon = 1e-10);
    assert!(res.message.contains("least-squares"));
    Ok(())
}

#[test]
fn degree_too_high() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 0.0, 5.0];

    let cfg = VandermondeCfg::new().set_x(&x)?.set_y(&y)?.set_degree(4)?;
    let err = interpolate(cfg).unwrap_err();

    assert_eq!(err, InterpolationError::DegreeTooHigh { degree: 4, points: 4, max: 3 });
    Ok(())
}

#[test]
fn zero_degree_rejected() {
    let err = VandermondeCfg::new().set_degree(0).unwrap_err();
    assert_eq!(err, InterpolationError::InvalidDegree { got: 0 });
}

#[test]
fn polynomial_has_no_domain_limit() -> TestResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let res = interpolate(VandermondeCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert_eq!(res.interpolant.domain(), None);
    assert_abs_diff_eq!(res.interpolant.eval(10.0)?, 10.0, epsilon = 1e-12);
    Ok(())
}
