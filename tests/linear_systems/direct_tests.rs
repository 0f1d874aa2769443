//! tests for gaussian elimination and system validation
use approx::assert_abs_diff_eq;

use numena::linear_systems::direct::{solve, validate, GaussCfg, PivotMode};
use numena::linear_systems::{DirectSolveError, LinearSystem, LinearSystemError};

type TestResult = Result<(), DirectSolveError>;

/// Zero in the first pivot position; solution (6.5, -2.5, 2).
fn needs_pivoting() -> (Vec<Vec<f64>>, Vec<f64>) {
    let a = vec![
        vec![0.0, 2.0, 3.0],
        vec![1.0, 1.0, 1.0],
        vec![2.0, 2.0, 1.0],
    ];
    (a, vec![1.0, 6.0, 10.0])
}

#[test]
fn no_pivoting_hits_zero_pivot() -> TestResult {
    let (a, b) = needs_pivoting();
    let sys = LinearSystem::new(&a, &b)?;
    let err = solve(&sys, GaussCfg::new().set_pivot(PivotMode::None)).unwrap_err();

    assert_eq!(err, DirectSolveError::ZeroPivot { stage: 1, pivot: 0.0 });
    assert!(err.to_string().contains("division by zero"));
    Ok(())
}

#[test]
fn partial_and_total_pivoting_solve() -> TestResult {
    let (a, b) = needs_pivoting();
    let sys = LinearSystem::new(&a, &b)?;
    let want = [6.5, -2.5, 2.0];

    for mode in [PivotMode::Partial, PivotMode::Total] {
        let res = solve(&sys, GaussCfg::new().set_pivot(mode))?;
        assert_eq!(res.pivot, mode);
        for (got, want) in res.solution.iter().zip(want) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(res.determinant, 2.0, epsilon = 1e-12);
        assert!(res.residual < 1e-12);
    }
    Ok(())
}

#[test]
fn upper_factor_is_triangular() -> TestResult {
    let (a, b) = needs_pivoting();
    let sys = LinearSystem::new(&a, &b)?;
    let res = solve(&sys, GaussCfg::new().set_pivot(PivotMode::Total))?;

    for (i, row) in res.upper.iter().enumerate() {
        assert_eq!(row.len(), 4);
        for v in &row[..i] {
            assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-12);
        }
    }
    let mut order = res.variable_order.clone();
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn process_only_when_requested() -> TestResult {
    let (a, b) = needs_pivoting();
    let sys = LinearSystem::new(&a, &b)?;

    assert!(solve(&sys, GaussCfg::new())?.process.is_none());
    let shown = solve(&sys, GaussCfg::new().set_show_process(true))?;
    assert!(shown.process.is_some_and(|p| p.len() >= 3));
    Ok(())
}

#[test]
fn singular_matrix() -> TestResult {
    let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    let sys = LinearSystem::new(&a, &[1.0, 2.0])?;
    let err = solve(&sys, GaussCfg::new()).unwrap_err();

    assert_eq!(err, DirectSolveError::Singular { stage: 2 });
    Ok(())
}

#[test]
fn malformed_systems() {
    let not_square = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        LinearSystem::new(&not_square, &[1.0, 2.0]).unwrap_err(),
        LinearSystemError::NotSquare { n: 2, row: 1, len: 1 }
    );

    let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    assert_eq!(
        LinearSystem::new(&a, &[1.0]).unwrap_err(),
        LinearSystemError::DimensionMismatch { n: 2, b_len: 1 }
    );
    assert_eq!(LinearSystem::new(&[], &[]).unwrap_err(), LinearSystemError::EmptyMatrix);
}

#[test]
fn validate_recommends_pivoting() {
    let (a, b) = needs_pivoting();
    let report = validate(&a, &b, PivotMode::None);

    assert!(!report.valid);
    assert!(report.nonsingular);
    assert!(!report.pivot_ok);
    assert_eq!(report.recommended, Some(PivotMode::Partial));

    let report = validate(&a, &b, PivotMode::Partial);
    assert!(report.valid);
    assert!(report.determinant.is_some_and(|d| (d - 2.0).abs() < 1e-12));
}

#[test]
fn validate_flags_singular_and_malformed() {
    let singular = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    let report = validate(&singular, &[1.0, 2.0], PivotMode::Partial);
    assert!(!report.valid);
    assert!(!report.nonsingular);
    assert_eq!(report.recommended, None);

    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    let report = validate(&ragged, &[1.0, 2.0], PivotMode::Partial);
    assert!(!report.valid);
    assert!(!report.square);
    assert_eq!(report.determinant, None);
}

#[test]
fn one_by_one_system() -> TestResult {
    let sys = LinearSystem::new(&[vec![4.0]], &[2.0])?;

    for mode in [PivotMode::None, PivotMode::Partial, PivotMode::Total] {
        let res = solve(&sys, GaussCfg::new().set_pivot(mode).set_show_process(true))?;
        assert_eq!(res.solution, [0.5]);
        assert_eq!(res.determinant, 4.0);
        assert_eq!(res.variable_order, [0]);
        assert_eq!(res.row_swaps + res.column_swaps, 0);
    }
    Ok(())
}
