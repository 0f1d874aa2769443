//! tests for the natural cubic spline
use approx::assert_abs_diff_eq;

use numena::interpolation::spline::natural::{interpolate, NaturalSplineCfg};
use numena::interpolation::{Algorithm, InterpolationError, Interpolator};

type TestResult = Result<(), InterpolationError>;

#[test]
fn hat_data() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 0.0];
    let x_eval = [0.5, 1.0, 1.5];

    let cfg = NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x_eval)?;
    let res = interpolate(cfg)?;

    assert_eq!(res.algorithm, Algorithm::CubicSpline);
    assert_abs_diff_eq!(res.evaluated[0], 0.6875, epsilon = 1e-12);
    assert_abs_diff_eq!(res.evaluated[1], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(res.evaluated[2], 0.6875, epsilon = 1e-12);
    Ok(())
}

#[test]
fn reproduces_a_line() -> TestResult {
    let x = [2.0, 0.0, 1.0, 3.5];
    let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 1.0).collect();

    let res = interpolate(NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?)?;

    for xq in [0.25, 1.7, 3.1] {
        assert_abs_diff_eq!(res.interpolant.eval(xq)?, 3.0 * xq - 1.0, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn passes_through_nodes() -> TestResult {
    let x = [0.0, 0.7, 1.1, 2.5, 3.0];
    let y = [1.0, -0.5, 0.25, 2.0, 1.0];

    let res = interpolate(NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?)?;

    assert!(res.interpolant.max_node_error(&x, &y)? < 1e-12);
    let knots = res.interpolant.as_piecewise().map(|s| s.knots().to_vec());
    assert_eq!(knots, Some(x.to_vec()));
    Ok(())
}

#[test]
fn pieces_join_smoothly() -> TestResult {
    let x = [0.0, 1.0, 2.0, 4.0];
    let y = [0.0, 1.0, 0.0, 2.0];

    let res = interpolate(NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?)?;

    // left and right limits at interior knots agree
    let h = 1e-7;
    for k in [1.0, 2.0] {
        let left  = res.interpolant.eval(k - h)?;
        let right = res.interpolant.eval(k + h)?;
        assert_abs_diff_eq!(left, right, epsilon = 1e-5);
    }
    Ok(())
}

#[test]
fn outside_knots() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 0.0];

    let res = interpolate(NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?)?;
    let err = res.interpolant.eval(-0.1).unwrap_err();

    assert!(matches!(err, InterpolationError::OutOfBounds { .. }));
    Ok(())
}
