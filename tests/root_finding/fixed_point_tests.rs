//! tests for fixed-point iteration
use approx::assert_abs_diff_eq;

use numena::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use numena::root_finding::{StopMode, Termination};

type TestResult = Result<(), FixedPointError>;

#[test]
fn converges_to_dottie_number() -> TestResult {
    let f   = |x: f64| x - x.cos();
    let g   = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_tolerance(1e-10)?;

    let res = fixed_point(f, g, 0.5, cfg)?;

    assert!(res.success);
    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 0.739_085_133_2, epsilon = 1e-8);
    Ok(())
}

#[test]
fn seed_row_is_index_zero() -> TestResult {
    let f   = |x: f64| x - x.cos();
    let g   = |x: f64| x.cos();
    let res = fixed_point(f, g, 0.5, FixedPointCfg::new())?;

    assert_eq!(res.iterations[0].index, 0);
    assert_eq!(res.iterations[0].value("x"), Some(0.5));
    assert_eq!(res.iterations[0].error, None);
    assert_eq!(res.iterations.len(), res.iteration_count + 1);
    Ok(())
}

#[test]
fn divergent_map() -> TestResult {
    let f   = |x: f64| x * x - x + 1.0;
    let g   = |x: f64| x * x + 1.0;
    let res = fixed_point(f, g, 2.0, FixedPointCfg::new())?;

    assert!(!res.success);
    assert!(matches!(res.termination, Termination::Diverged { .. }));
    assert!(res.root.is_none());
    Ok(())
}

#[test]
fn fixed_iteration_mode() -> TestResult {
    let f   = |x: f64| x - x.cos();
    let g   = |x: f64| x.cos();
    let cfg = FixedPointCfg::new()
        .set_mode(StopMode::FixedIterations)
        .set_max_iter(5)?;

    let res = fixed_point(f, g, 0.5, cfg)?;

    assert!(res.success);
    assert_eq!(res.termination, Termination::FixedIterationsCompleted);
    assert_eq!(res.iteration_count, 5);
    assert_eq!(res.iterations.len(), 6);
    Ok(())
}

#[test]
fn non_finite_seed() {
    let f = |x: f64| x;
    let g = |x: f64| x;
    assert!(fixed_point(f, g, f64::INFINITY, FixedPointCfg::new()).is_err());
}
