//! tests for the jacobi, gauss-seidel and SOR solvers
use approx::{assert_abs_diff_eq, assert_relative_eq};

use numena::linear_systems::direct::{solve, GaussCfg};
use numena::linear_systems::iterative::{
    gauss_seidel, jacobi, sor, GaussSeidelCfg, JacobiCfg, SorCfg, SweepTermination,
};
use numena::linear_systems::{IterativeError, LinearSystem};
use numena::ErrorKind;

type TestResult = Result<(), IterativeError>;

/// Diagonally dominant; ρ(T_J) = √2 / 4, ρ(T_GS) = 1 / 8.
fn tridiagonal() -> Result<LinearSystem, IterativeError> {
    let a = vec![
        vec![ 4.0, -1.0,  0.0],
        vec![-1.0,  4.0, -1.0],
        vec![ 0.0, -1.0,  4.0],
    ];
    Ok(LinearSystem::new(&a, &[15.0, 10.0, 10.0])?)
}

const SOLUTION: [f64; 3] = [4.910_714_285_714_286, 4.642_857_142_857_143, 3.660_714_285_714_286];

#[test]
fn jacobi_converges() -> TestResult {
    let sys = tridiagonal()?;
    let res = jacobi(&sys, &JacobiCfg::new())?;

    assert!(res.success);
    assert!(res.theoretically_convergent);
    assert_eq!(res.termination, SweepTermination::ToleranceReached);
    assert_relative_eq!(res.spectral_radius, 2.0_f64.sqrt() / 4.0, epsilon = 1e-9);
    for (got, want) in res.solution.iter().zip(SOLUTION) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
    }
    assert_eq!(res.iterations.len(), res.iteration_count);
    Ok(())
}

#[test]
fn gauss_seidel_needs_fewer_sweeps() -> TestResult {
    let sys = tridiagonal()?;
    let j  = jacobi(&sys, &JacobiCfg::new())?;
    let gs = gauss_seidel(&sys, &GaussSeidelCfg::new())?;

    assert!(gs.success);
    assert_relative_eq!(gs.spectral_radius, 0.125, epsilon = 1e-9);
    assert!(gs.iteration_count < j.iteration_count);
    Ok(())
}

#[test]
fn sor_matches_direct_solve() -> Result<(), Box<dyn std::error::Error>> {
    let sys = tridiagonal()?;
    let cfg = SorCfg::new().set_omega(1.1)?.set_tolerance(1e-10)?;
    let res = sor(&sys, &cfg)?;
    let direct = solve(&sys, GaussCfg::new())?;

    assert!(res.success);
    assert_eq!(res.omega, Some(1.1));
    for (got, want) in res.solution.iter().zip(&direct.solution) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-8);
    }
    Ok(())
}

#[test]
fn trace_rows_hold_every_component() -> TestResult {
    let sys = tridiagonal()?;
    let cfg = JacobiCfg::new().set_x0(&[1.0, 1.0, 1.0])?.set_error_kind(ErrorKind::Relative);
    let res = jacobi(&sys, &cfg)?;

    let first = &res.iterations[0];
    assert_eq!(first.index, 1);
    // x1 = (15 + 1) / 4
    assert_eq!(first.value("x1"), Some(4.0));
    assert!(first.value("x3").is_some());
    assert_eq!(res.error_kind, ErrorKind::Relative);
    Ok(())
}

#[test]
fn divergent_splitting() -> TestResult {
    let a = vec![vec![1.0, 2.0], vec![3.0, 1.0]];
    let sys = LinearSystem::new(&a, &[1.0, 1.0])?;
    let res = jacobi(&sys, &JacobiCfg::new().set_max_iter(30)?)?;

    assert!(!res.success);
    assert!(!res.theoretically_convergent);
    assert!(res.spectral_radius > 1.0);
    assert_eq!(res.termination, SweepTermination::IterationLimit);
    Ok(())
}

#[test]
fn zero_diagonal() -> TestResult {
    let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let sys = LinearSystem::new(&a, &[1.0, 1.0])?;

    assert_eq!(
        gauss_seidel(&sys, &GaussSeidelCfg::new()).unwrap_err(),
        IterativeError::ZeroDiagonal { row: 0 }
    );
    Ok(())
}

#[test]
fn guess_length_mismatch() -> TestResult {
    let sys = tridiagonal()?;
    let cfg = JacobiCfg::new().set_x0(&[0.0, 0.0])?;

    assert_eq!(
        jacobi(&sys, &cfg).unwrap_err(),
        IterativeError::InitialGuessLength { expected: 3, got: 2 }
    );
    Ok(())
}

#[test]
fn invalid_settings() {
    assert!(SorCfg::new().set_omega(2.0).is_err());
    assert!(SorCfg::new().set_omega(0.0).is_err());
    assert!(JacobiCfg::new().set_tolerance(-1.0).is_err());
    assert!(JacobiCfg::new().set_max_iter(0).is_err());
    assert!(JacobiCfg::new().set_x0(&[f64::NAN]).is_err());
}

#[test]
fn one_by_one_system() -> TestResult {
    let sys = LinearSystem::new(&[vec![4.0]], &[2.0])?;
    let res = jacobi(&sys, &JacobiCfg::new())?;

    assert!(res.success);
    assert_eq!(res.solution, [0.5]);
    assert_eq!(res.spectral_radius, 0.0);
    assert_eq!(res.iteration_count, 2);
    Ok(())
}

#[test]
fn overflow_keeps_last_finite_iterate() -> TestResult {
    // T = [[0, -1e200], [-1e200, 0]], ρ(T) = 1e200
    let a = vec![vec![1.0, 1e200], vec![1e200, 1.0]];
    let sys = LinearSystem::new(&a, &[1.0, 1.0])?;
    let res = jacobi(&sys, &JacobiCfg::new())?;

    assert!(!res.success);
    assert_eq!(res.termination, SweepTermination::Diverged { step: 3 });
    assert_eq!(res.iteration_count, 2);
    assert_eq!(res.solution, [-1e200, -1e200]);
    assert!(!res.theoretically_convergent);
    assert_relative_eq!(res.spectral_radius, 1e200, max_relative = 1e-9);
    assert!(res.message.contains("not guaranteed"));
    Ok(())
}
