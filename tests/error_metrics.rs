//! tests for error metrics and propagation
use approx::{assert_abs_diff_eq, assert_relative_eq};

use numena::error_metrics::{
    absolute_error, percentage_error, propagate, relative_error, relative_error_summary,
    ErrorMetricsError, Operation,
};

type TestResult = Result<(), ErrorMetricsError>;

#[test]
fn absolute_is_symmetric() -> TestResult {
    assert_eq!(absolute_error(2.0, 2.0)?, 0.0);
    assert_eq!(absolute_error(1.5, 1.0)?, absolute_error(1.0, 1.5)?);
    Ok(())
}

#[test]
fn relative_and_percentage() -> TestResult {
    assert_relative_eq!(relative_error(3.14, 3.2)?, 0.06 / 3.2, epsilon = 1e-12);
    assert_relative_eq!(percentage_error(3.14, 3.2)?, 6.0 / 3.2, epsilon = 1e-12);
    assert_relative_eq!(relative_error(-0.9, -1.0)?, 0.1, epsilon = 1e-12);
    Ok(())
}

#[test]
fn relative_against_zero() {
    let err = relative_error(1.0, 0.0).unwrap_err();
    assert!(matches!(err, ErrorMetricsError::DivisionByZero { .. }));
}

#[test]
fn summary_reports_all_three() -> TestResult {
    let s = relative_error_summary(9.0, 10.0)?;

    assert_abs_diff_eq!(s.absolute, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.relative, 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(s.percentage, 10.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn non_finite_operand() {
    let err = absolute_error(f64::NAN, 1.0).unwrap_err();
    assert!(matches!(err, ErrorMetricsError::NonFinite { name: "approx", .. }));
}

#[test]
fn propagates_through_each_operation() -> TestResult {
    let add = propagate(2.0, 0.1, 3.0, 0.2, Operation::Add)?;
    assert_abs_diff_eq!(add.value, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(add.abs_error, 0.3, epsilon = 1e-12);

    let sub = propagate(2.0, 0.1, 3.0, 0.2, Operation::Sub)?;
    assert_abs_diff_eq!(sub.abs_error, 0.3, epsilon = 1e-12);

    let mul = propagate(2.0, 0.1, 3.0, 0.2, Operation::Mul)?;
    assert_abs_diff_eq!(mul.value, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mul.abs_error, 0.7, epsilon = 1e-12);
    assert_abs_diff_eq!(mul.relative_error, 0.7 / 6.0, epsilon = 1e-12);

    let div = propagate(6.0, 0.3, 2.0, 0.1, Operation::Div)?;
    assert_abs_diff_eq!(div.value, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(div.abs_error, (2.0 * 0.3 + 6.0 * 0.1) / 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn propagation_input_errors() {
    assert!(matches!(
        propagate(1.0, 0.1, 0.0, 0.1, Operation::Div).unwrap_err(),
        ErrorMetricsError::DivisionByZero { .. }
    ));
    assert_eq!(
        propagate(1.0, -0.1, 2.0, 0.1, Operation::Add).unwrap_err(),
        ErrorMetricsError::NegativeUncertainty { name: "ex", got: -0.1 }
    );
}

#[test]
fn operation_parsing() -> TestResult {
    assert_eq!("*".parse::<Operation>()?, Operation::Mul);
    assert_eq!(" Div ".parse::<Operation>()?, Operation::Div);
    assert!(matches!(
        "%".parse::<Operation>().unwrap_err(),
        ErrorMetricsError::UnknownOperation { .. }
    ));

    let op: Result<Operation, _> = serde_json::from_str("\"+\"");
    assert_eq!(op.ok(), Some(Operation::Add));
    Ok(())
}
