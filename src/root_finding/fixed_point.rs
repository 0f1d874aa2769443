//! Fixed-point iteration.
//!
//! Iterates `x_{n+1} = g(x_n)` and monitors `f(x_{n+1})`, where `g` is a
//! rearrangement of `f(x) = 0`.

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg, StopMode};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{Finish, RootResult, Run, Termination};
use super::tolerances::{all_finite, finite_seed, residual_converged, step_converged};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::FixedPoint;


#[derive(Debug, Error, PartialEq)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Fixed-point configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, `max_iter`, error kind, `abs_fx`.
/// - `mode`   : [`StopMode`]; in `FixedIterations` mode exactly `max_iter`
///              steps are taken and the tolerance is ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedPointCfg {
    common: CommonCfg,
    mode: StopMode,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), mode: StopMode::Tolerance } }

    #[must_use]
    pub fn set_mode(mut self, v: StopMode) -> Self { self.mode = v; self }

    pub fn mode(&self) -> StopMode { self.mode }
}
impl_common_cfg!(FixedPointCfg);
impl_with_common!(FixedPointCfg);


/// Finds a fixed point of `g`, i.e. a root of `f`.
///
/// # Arguments
///
/// ┌ `f`   - The function whose root is sought; evaluated for the trace and exact-root test.
/// ├ `g`   - Iteration function with `g(x) = x` exactly when `f(x) = 0`.
/// ├ `x0`  - Initial guess.
/// └ `cfg` - See [`FixedPointCfg`].
///
/// # Returns
///
/// Row 0 is the seed. Row `n` holds `x_n = g(x_{n-1})`, `f(x_n)` and the
/// step error.
/// ├ [`Termination::ToleranceReached`]         : step error below tolerance
/// ├ [`Termination::FixedIterationsCompleted`] : `StopMode::FixedIterations` finished
/// ├ [`Termination::ExactRoot`]                : `f(x) == 0`
/// ├ [`Termination::Diverged`]                 : `g(x)` or `f(x)` non-finite
/// └ [`Termination::IterationLimit`]           : `max_iter` steps without convergence
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]       - `x0` non-finite.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f(x0)` non-finite.
#[instrument(skip(f, g, cfg), fields(algorithm = "fixed_point"))]
pub fn fixed_point<F, G>(
    mut f: F,
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<RootResult, FixedPointError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mode = cfg.mode;
    let cfg  = *cfg.common();
    let mut x  = finite_seed("x0", x0)?;
    let mut run = Run::new(ALGORITHM, cfg.error_kind());
    let mut fx = run.eval_seed(&mut f, x)?;

    run.record(IterationRecord::new(0).with("x", x).with("f(x)", fx));
    if fx == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x, fx)));
    }

    let mut last_error = None;
    for iter in 1..=cfg.max_iter() {
        let x_next  = run.eval(&mut g, x);
        let fx_next = if x_next.is_finite() { run.eval(&mut f, x_next) } else { f64::NAN };
        if !all_finite(&[x_next, fx_next]) {
            tracing::warn!(step = iter, x, "fixed-point iteration diverged");
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).error(last_error)
            ));
        }

        let error = cfg.error_kind().between(x_next, x);
        let row = IterationRecord::new(iter)
            .with("x", x_next)
            .with("f(x)", fx_next)
            .with_error(Some(error));
        x  = x_next;
        fx = fx_next;
        last_error = Some(error);

        if fx == 0.0 {
            run.record(row.with_note("exact root"));
            return Ok(run.finish(Finish::new(Termination::ExactRoot, iter).at(x, fx).error(last_error)));
        }
        run.record(row);

        if mode == StopMode::FixedIterations {
            continue;
        }
        if residual_converged(fx, cfg.abs_fx()) {
            return Ok(run.finish(Finish::new(Termination::ResidualReached, iter).at(x, fx).error(last_error)));
        }
        if step_converged(error, cfg.tolerance()) {
            return Ok(run.finish(Finish::new(Termination::ToleranceReached, iter).at(x, fx).error(last_error)));
        }
    }

    let termination = match mode {
        StopMode::FixedIterations => Termination::FixedIterationsCompleted,
        StopMode::Tolerance       => Termination::IterationLimit,
    };
    Ok(run.finish(Finish::new(termination, cfg.max_iter()).at(x, fx).error(last_error)))
}
