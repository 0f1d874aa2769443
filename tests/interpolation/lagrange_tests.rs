//! tests for lagrange interpolation
use approx::assert_abs_diff_eq;

use numena::interpolation::lagrange::{basis, interpolate, LagrangeCfg};
use numena::interpolation::{Algorithm, InterpolationError};

type TestResult = Result<(), InterpolationError>;

#[test]
fn basis_is_cardinal() {
    let x = [0.0, 1.5, 2.0, 4.0];
    for i in 0..x.len() {
        let l = basis(&x, i);
        for (j, &xj) in x.iter().enumerate() {
            let want = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(l.evaluate(xj), want, epsilon = 1e-12);
        }
    }
}

#[test]
fn evaluates_between_nodes() -> TestResult {
    // x³ through four nodes is reproduced exactly
    let x = [-1.0, 0.0, 1.0, 2.0];
    let y: Vec<f64> = x.iter().map(|v: &f64| v.powi(3)).collect();
    let x_eval = [0.5, 1.5];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&x_eval)?;
    let res = interpolate(cfg)?;

    assert_eq!(res.algorithm, Algorithm::Lagrange);
    assert_eq!(res.n_evaluated, 2);
    assert_abs_diff_eq!(res.evaluated[0], 0.125, epsilon = 1e-12);
    assert_abs_diff_eq!(res.evaluated[1], 3.375, epsilon = 1e-12);
    Ok(())
}

#[test]
fn single_point_rejected() {
    let x = [1.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();

    assert_eq!(err, InterpolationError::InsufficientPoints { got: 1 });
}

#[test]
fn non_finite_value() {
    let y = [0.0, f64::NAN];
    let err = LagrangeCfg::new().set_y(&y).unwrap_err();

    assert_eq!(err, InterpolationError::NonFiniteVec { idx: 1 });
}
