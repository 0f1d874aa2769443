//! Regula falsi (false position) method.

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{Degeneracy, Finish, RootResult, Run, Termination};
use super::signs::{opposite_sign, same_sign};
use super::tolerances::{residual_converged, step_converged, DENOMINATOR_EPS};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::RegulaFalsi;


#[derive(Debug, Error, PartialEq)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// RegulaFalsi configuration. Same knobs and defaults as
/// [`BisectionCfg`](super::bisection::BisectionCfg).
#[derive(Debug, Copy, Clone, Default)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new() } }
}
impl_common_cfg!(RegulaFalsiCfg);
impl_with_common!(RegulaFalsiCfg);


/// x-intercept of the chord through `(xi, fi)` and `(xs, fs)`.
///
/// # Returns
/// ├ `Ok(x)`          if `|fs - fi| >= DENOMINATOR_EPS`
/// └ `Err(degeneracy)` otherwise
#[inline]
fn calculate_false_position(
    (xi, fi): (f64, f64),
    (xs, fs): (f64, f64),
) -> Result<f64, Degeneracy> {
    let denominator = fs - fi;
    if denominator.abs() < DENOMINATOR_EPS {
        return Err(Degeneracy::ZeroDenominator { x: xi, denominator });
    }
    Ok(xi - fi * (xs - xi) / denominator)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same bracket policy as [`bisection`](super::bisection::bisection), with the
/// midpoint replaced by the chord intercept
/// `xm = xi - f(xi) (xs - xi) / (f(xs) - f(xi))`.
///
/// # Returns
///
/// Trace rows hold `xi, xs, xm, f(xm)`; terminations as for bisection, plus
/// [`Degeneracy::ZeroDenominator`] when `f(xs) - f(xi)` vanishes.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `xi` or `xs` non-finite or `xi >= xs`.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f(xi)` or `f(xs)` non-finite.
#[instrument(skip(func, cfg), fields(algorithm = "regula_falsi"))]
pub fn regula_falsi<F>(
    mut func: F,
    mut xi: f64,
    mut xs: f64,
    cfg: RegulaFalsiCfg,
) -> Result<RootResult, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(xi.is_finite() && xs.is_finite()) || xi >= xs {
        return Err(RootFindingError::InvalidBounds { a: xi, b: xs }.into());
    }
    let cfg = *cfg.common();
    let mut run = Run::new(ALGORITHM, cfg.error_kind());

    let mut fi = run.eval_seed(&mut func, xi)?;
    let mut fs = run.eval_seed(&mut func, xs)?;

    if fi == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(xi, fi).bracket(xi, xs)));
    }
    if fs == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(xs, fs).bracket(xi, xs)));
    }
    if !opposite_sign(fi, fs) {
        let d = Degeneracy::NoSignChange { xi, xs, fi, fs };
        return Ok(run.finish(Finish::new(Termination::Degenerate(d), 0)));
    }

    let mut prev: Option<f64> = None;
    let mut last = (xi, fi);
    let mut last_error = None;
    for iter in 1..=cfg.max_iter() {
        let xm = match calculate_false_position((xi, fi), (xs, fs)) {
            Ok(x)  => x,
            Err(d) => {
                return Ok(run.finish(
                    Finish::new(Termination::Degenerate(d), iter - 1).bracket(xi, xs).error(last_error)
                ));
            }
        };
        let fm = run.eval(&mut func, xm);
        if !fm.is_finite() {
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).bracket(xi, xs)
            ));
        }

        let error = prev.map(|p| cfg.error_kind().between(xm, p));
        let row = IterationRecord::new(iter)
            .with("xi", xi)
            .with("xs", xs)
            .with("xm", xm)
            .with("f(xm)", fm);

        if fm == 0.0 {
            run.record(row.with_error(Some(0.0)).with_note("exact root"));
            return Ok(run.finish(
                Finish::new(Termination::ExactRoot, iter).at(xm, fm).bracket(xi, xs).error(Some(0.0))
            ));
        }
        run.record(row.with_error(error));

        if same_sign(fi, fm) {
            xi = xm;
            fi = fm;
        } else {
            xs = xm;
            fs = fm;
        }

        if residual_converged(fm, cfg.abs_fx()) {
            return Ok(run.finish(
                Finish::new(Termination::ResidualReached, iter).at(xm, fm).bracket(xi, xs).error(error)
            ));
        }
        if matches!(error, Some(e) if step_converged(e, cfg.tolerance())) {
            return Ok(run.finish(
                Finish::new(Termination::ToleranceReached, iter).at(xm, fm).bracket(xi, xs).error(error)
            ));
        }
        prev = Some(xm);
        last = (xm, fm);
        last_error = error;
    }

    Ok(run.finish(
        Finish::new(Termination::IterationLimit, cfg.max_iter())
            .at(last.0, last.1)
            .bracket(xi, xs)
            .error(last_error)
    ))
}
