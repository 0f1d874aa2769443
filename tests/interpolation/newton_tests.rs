//! tests for newton divided-difference interpolation
use approx::assert_abs_diff_eq;

use numena::interpolation::newton::{divided_difference_table, interpolate, NewtonCfg};
use numena::interpolation::{lagrange, vandermonde, InterpolationError};

type TestResult = Result<(), InterpolationError>;

const X: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
const Y: [f64; 4] = [1.0, 2.0, 0.0, 5.0];

#[test]
fn table_diagonal_holds_coefficients() {
    let table = divided_difference_table(&X, &Y);

    assert_eq!(table[0][0], 1.0);
    assert_eq!(table[1][1], 1.0);
    assert_eq!(table[2][2], -1.5);
    assert_abs_diff_eq!(table[3][3], 5.0 / 3.0, epsilon = 1e-15);
    assert_eq!(table[0][3], 0.0);
}

#[test]
fn report_carries_table() -> TestResult {
    let res = interpolate(NewtonCfg::new().set_x(&X)?.set_y(&Y)?)?;

    let table = res.divided_differences.unwrap_or_default();
    assert_eq!(table.len(), 4);
    assert_eq!(table[2][1], -2.0);
    Ok(())
}

#[test]
fn agrees_with_other_polynomial_forms() -> TestResult {
    let newton = interpolate(NewtonCfg::new().set_x(&X)?.set_y(&Y)?)?;
    let lagrange = lagrange::interpolate(lagrange::LagrangeCfg::new().set_x(&X)?.set_y(&Y)?)?;
    let vander = vandermonde::interpolate(vandermonde::VandermondeCfg::new().set_x(&X)?.set_y(&Y)?)?;

    let coeffs = |r: &numena::interpolation::InterpolationReport| {
        r.interpolant.as_polynomial().map(|p| p.coefficients().to_vec()).unwrap_or_default()
    };
    let (n, l, v) = (coeffs(&newton), coeffs(&lagrange), coeffs(&vander));

    assert_eq!(n.len(), 4);
    assert_eq!(l.len(), 4);
    assert_eq!(v.len(), 4);
    for i in 0..4 {
        assert_abs_diff_eq!(n[i], l[i], epsilon = 1e-9);
        assert_abs_diff_eq!(n[i], v[i], epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn duplicate_nodes() {
    let x = [0.0, 1.0, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();

    assert_eq!(err, InterpolationError::DuplicateX { x1: 1.0, x2: 1.0 });
}

#[test]
fn unequal_lengths() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let err = NewtonCfg::new().set_x(&x)?.set_y(&y).unwrap_err();

    assert_eq!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 });
    Ok(())
}

#[test]
fn missing_y() -> TestResult {
    let err = interpolate(NewtonCfg::new().set_x(&X)?).unwrap_err();

    assert_eq!(err, InterpolationError::EmptyInput);
    Ok(())
}
