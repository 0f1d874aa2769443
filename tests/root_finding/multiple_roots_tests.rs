//! tests for the modified newton method on multiple roots
use approx::assert_abs_diff_eq;

use numena::root_finding::multiple_roots::{multiple_roots, MultipleRootsCfg, MultipleRootsError};
use numena::root_finding::newton::{newton, NewtonCfg};
use numena::root_finding::{Degeneracy, StopMode, Termination};

type TestResult = Result<(), MultipleRootsError>;

#[test]
fn finds_double_root() -> TestResult {
    let f   = |x: f64| x.powi(3) - 3.0 * x + 2.0;
    let df  = |x: f64| 3.0 * x * x - 3.0;
    let ddf = |x: f64| 6.0 * x;
    let cfg = MultipleRootsCfg::new().set_abs_fx(1e-10)?;

    let res = multiple_roots(f, df, ddf, 0.5, cfg)?;

    assert!(res.success);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 1.0, epsilon = 1e-5);
    Ok(())
}

#[test]
fn beats_plain_newton_on_double_root() -> Result<(), Box<dyn std::error::Error>> {
    let f   = |x: f64| (x - 1.0).powi(2) * (x + 2.0);
    let df  = |x: f64| 3.0 * x * x - 3.0;
    let ddf = |x: f64| 6.0 * x;
    let cfg = MultipleRootsCfg::new().set_abs_fx(1e-10)?;

    let modified = multiple_roots(f, df, ddf, 0.5, cfg)?;
    let plain    = newton(f, df, 0.5, NewtonCfg::new().set_abs_fx(1e-10)?)?;

    assert!(modified.success);
    assert!(modified.iteration_count < plain.iteration_count);
    Ok(())
}

#[test]
fn seed_row_is_recorded() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let ddf = |_: f64| 2.0;
    let res = multiple_roots(f, df, ddf, 1.0, MultipleRootsCfg::new())?;

    assert_eq!(res.iterations[0].index, 0);
    assert!(res.iterations[0].value("f''(x)").is_some());
    Ok(())
}

#[test]
fn exponential_has_vanishing_denominator() -> TestResult {
    // f'^2 - f f'' = e^{2x} - e^{2x}
    let res = multiple_roots(f64::exp, f64::exp, f64::exp, 0.0, MultipleRootsCfg::new())?;

    assert!(!res.success);
    assert!(matches!(
        res.termination,
        Termination::Degenerate(Degeneracy::ZeroDenominator { x, .. }) if x == 0.0
    ));
    assert_eq!(res.iteration_count, 0);
    assert_eq!(res.iterations.len(), 1);
    Ok(())
}

#[test]
fn fixed_mode_runs_every_step() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let ddf = |_: f64| 2.0;
    let cfg = MultipleRootsCfg::new()
        .set_max_iter(4)?
        .set_tolerance(1e-1)?
        .set_mode(StopMode::FixedIterations);

    let res = multiple_roots(f, df, ddf, 1.0, cfg)?;

    assert!(res.success);
    assert_eq!(res.termination, Termination::FixedIterationsCompleted);
    assert_eq!(res.iteration_count, 4);
    assert_eq!(res.iterations.len(), 5);
    assert_abs_diff_eq!(res.root.unwrap_or(f64::NAN), 2.0_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn fixed_mode_still_stops_on_exact_root() -> TestResult {
    let f   = |x: f64| (x - 1.0).powi(2);
    let df  = |x: f64| 2.0 * (x - 1.0);
    let ddf = |_: f64| 2.0;
    let cfg = MultipleRootsCfg::new().set_mode(StopMode::FixedIterations);

    // one step from 3: 3 - 4 * 4 / (16 - 8) = 1
    let res = multiple_roots(f, df, ddf, 3.0, cfg)?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(1.0));
    assert_eq!(res.iteration_count, 1);
    Ok(())
}
