//! Bisection method.

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{Degeneracy, Finish, RootResult, Run, Termination};
use super::signs::{opposite_sign, same_sign};
use super::tolerances::{residual_converged, step_converged};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::Bisection;


#[derive(Debug, Error, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Bisection configuration.
///
/// # Defaults
///
/// ┌ tolerance  = 1e-7
/// ├ max_iter   = 100
/// ├ error_kind = absolute
/// └ abs_fx     = disabled
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new() } }
}
impl_common_cfg!(BisectionCfg);
impl_with_common!(BisectionCfg);


/// Midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `xi`   - Lower bound of the search interval. Must be finite and less than `xs`.
/// ├ `xs`   - Upper bound of the search interval.
/// └ `cfg`  - See [`BisectionCfg`].
///
/// # Returns
///
/// A [`RootResult`] whose trace rows hold `xi, xs, xm, f(xm)`. The first row
/// has no error since there is no previous midpoint.
/// ├ [`Termination::ExactRoot`]        : `f` is exactly zero at a bound or midpoint
/// ├ [`Termination::ToleranceReached`] : successive midpoints closer than tolerance
/// ├ [`Termination::ResidualReached`]  : `|f(xm)| <= abs_fx`
/// ├ [`Termination::IterationLimit`]   : `max_iter` midpoints without convergence
/// ├ [`Termination::Diverged`]         : `f(xm)` non-finite
/// └ [`Termination::Degenerate`]       : no sign change on `[xi, xs]`, zero iterations
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `xi` or `xs` non-finite or `xi >= xs`.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f(xi)` or `f(xs)` non-finite.
#[instrument(skip(func, cfg), fields(algorithm = "bisection"))]
pub fn bisection<F>(
    mut func: F,
    mut xi: f64,
    mut xs: f64,
    cfg: BisectionCfg,
) -> Result<RootResult, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(xi.is_finite() && xs.is_finite()) || xi >= xs {
        return Err(RootFindingError::InvalidBounds { a: xi, b: xs }.into());
    }
    let cfg = *cfg.common();
    let mut run = Run::new(ALGORITHM, cfg.error_kind());

    let mut fi = run.eval_seed(&mut func, xi)?;
    let fs     = run.eval_seed(&mut func, xs)?;

    // immediate bounds are roots
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
        let xm = calculate_bisection(xi, xs);
        let fm = run.eval(&mut func, xm);
        if !fm.is_finite() {
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).bracket(xi, xs)
            ));
        }

        let mut error = prev.map(|p| cfg.error_kind().between(xm, p));
        let row = IterationRecord::new(iter)
            .with("xi", xi)
            .with("xs", xs)
            .with("xm", xm)
            .with("f(xm)", fm);

        if fm == 0.0 {
            error = Some(0.0);
            run.record(row.with_error(error).with_note("exact root"));
            return Ok(run.finish(
                Finish::new(Termination::ExactRoot, iter).at(xm, fm).bracket(xi, xs).error(error)
            ));
        }
        run.record(row.with_error(error));

        // shrink interval
        if same_sign(fi, fm) {
            xi = xm;
            fi = fm;
        } else {
            xs = xm;
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
