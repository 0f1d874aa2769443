//! tests for the incremental search
use numena::root_finding::incremental::{incremental_search, IncrementalCfg, IncrementalError};
use numena::root_finding::Termination;

type TestResult = Result<(), IncrementalError>;

#[test]
fn finds_sign_change() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = incremental_search(f, 0.0, 0.5, IncrementalCfg::new())?;

    assert!(res.success);
    assert_eq!(res.termination, Termination::BracketFound);
    assert_eq!(res.bracket, Some([1.0, 1.5]));
    assert_eq!(res.iteration_count, 3);
    assert_eq!(res.iterations.last().and_then(|r| r.note), Some("sign change"));
    Ok(())
}

#[test]
fn lands_on_exact_root() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = incremental_search(f, 0.0, 0.5, IncrementalCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(2.0));
    assert_eq!(res.bracket, Some([1.5, 2.0]));
    Ok(())
}

#[test]
fn negative_step_scans_left() -> TestResult {
    let f   = |x: f64| x + 1.3;
    let res = incremental_search(f, 0.0, -0.5, IncrementalCfg::new())?;

    assert_eq!(res.termination, Termination::BracketFound);
    assert_eq!(res.bracket, Some([-1.5, -1.0]));
    Ok(())
}

#[test]
fn step_limit_without_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = IncrementalCfg::new().set_max_iter(10)?;
    let res = incremental_search(f, 0.0, 0.1, cfg)?;

    assert!(!res.success);
    assert_eq!(res.termination, Termination::IterationLimit);
    assert!(res.root.is_none());
    assert_eq!(res.iterations.len(), 10);
    Ok(())
}

#[test]
fn zero_step() {
    let f   = |x: f64| x;
    let err = incremental_search(f, 0.0, 0.0, IncrementalCfg::new()).unwrap_err();

    assert_eq!(err, IncrementalError::InvalidDelta { got: 0.0 });
}
