//! tests for the linear spline
use approx::assert_abs_diff_eq;

use numena::interpolation::spline::linear::{interpolate, LinearSplineCfg};
use numena::interpolation::{InterpolationError, Interpolator};

type TestResult = Result<(), InterpolationError>;

#[test]
fn evaluates_piecewise() -> TestResult {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0, 2.0];
    let x_eval = [0.5, 2.0, 3.0];

    let cfg = LinearSplineCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x_eval)?;
    let res = interpolate(cfg)?;

    assert_eq!(res.evaluated, vec![1.0, 2.0, 2.0]);

    let spline = res.interpolant.as_piecewise().cloned();
    let pieces = spline.as_ref().map(|s| s.pieces().len());
    assert_eq!(pieces, Some(2));
    let first = spline.as_ref().map(|s| s.pieces()[0].polynomial.coefficients().to_vec());
    assert_eq!(first, Some(vec![2.0, 0.0]));
    Ok(())
}

#[test]
fn sorts_unordered_nodes() -> TestResult {
    let x = [3.0, 0.0, 1.0];
    let y = [2.0, 0.0, 2.0];

    let res = interpolate(LinearSplineCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert_eq!(res.interpolant.domain(), Some([0.0, 3.0]));
    assert_abs_diff_eq!(res.interpolant.eval(0.25)?, 0.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn outside_knots() -> TestResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let x_eval = [1.5];

    let cfg = LinearSplineCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x_eval)?;
    let err = interpolate(cfg).unwrap_err();

    assert_eq!(err, InterpolationError::OutOfBounds { got: 1.5, x_min: 0.0, x_max: 1.0 });
    Ok(())
}
