//! Modified Newton method for roots of multiplicity > 1.
//!
//! `x_{n+1} = x_n - f f' / (f'^2 - f f'')`, which restores quadratic
//! convergence where plain Newton slows to linear.

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg, StopMode};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{Degeneracy, Finish, RootResult, Run, Termination};
use super::tolerances::{
    all_finite, finite_seed, residual_converged, step_converged, DENOMINATOR_EPS,
};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::MultipleRoots;


#[derive(Debug, Error, PartialEq)]
pub enum MultipleRootsError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("derivative non-finite at x={x}: f'(x)={dfx}, f''(x)={ddfx}")]
    DerivativeNotFinite { x: f64, dfx: f64, ddfx: f64 },
}


/// Multiple-roots configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `mode`   : [`StopMode`], tolerance-driven or a fixed number of steps
#[derive(Debug, Copy, Clone, Default)]
pub struct MultipleRootsCfg {
    common: CommonCfg,
    mode: StopMode,
}
impl MultipleRootsCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), mode: StopMode::Tolerance } }

    #[must_use]
    pub fn set_mode(mut self, v: StopMode) -> Self { self.mode = v; self }

    pub fn mode(&self) -> StopMode { self.mode }
}
impl_common_cfg!(MultipleRootsCfg);
impl_with_common!(MultipleRootsCfg);


#[inline]
fn calculate_modified_newton(x: f64, fx: f64, dfx: f64, ddfx: f64) -> Result<f64, Degeneracy> {
    let denominator = dfx * dfx - fx * ddfx;
    if denominator.abs() < DENOMINATOR_EPS {
        return Err(Degeneracy::ZeroDenominator { x, denominator });
    }
    Ok(x - fx * dfx / denominator)
}


/// Finds a (possibly multiple) root from `f`, `f'` and `f''`.
///
/// # Returns
///
/// Row 0 is the seed. Row `n` holds `x_n, f(x_n), f'(x_n), f''(x_n)` and the
/// step error.
/// ├ [`Termination::Degenerate`]               : `|f'^2 - f f''| < DENOMINATOR_EPS`
/// ├ [`Termination::FixedIterationsCompleted`] : `StopMode::FixedIterations` finished
/// └ otherwise as for [`newton`](super::newton::newton)
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]        - `x0` non-finite.
/// ├ [`RootFindingError::NonFiniteEvaluation`]  - `f(x0)` non-finite.
/// └ [`MultipleRootsError::DerivativeNotFinite`] - `f'(x0)` or `f''(x0)` non-finite.
#[instrument(skip(f, df, ddf, cfg), fields(algorithm = "multiple_roots"))]
pub fn multiple_roots<F, D, DD>(
    mut f: F,
    mut df: D,
    mut ddf: DD,
    x0: f64,
    cfg: MultipleRootsCfg,
) -> Result<RootResult, MultipleRootsError>
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
    DD: FnMut(f64) -> f64,
{
    let mode = cfg.mode;
    let cfg  = *cfg.common();
    let mut run = Run::new(ALGORITHM, cfg.error_kind());

    let mut x    = finite_seed("x0", x0)?;
    let mut fx   = run.eval_seed(&mut f, x)?;
    let mut dfx  = run.eval(&mut df, x);
    let mut ddfx = run.eval(&mut ddf, x);
    if !all_finite(&[dfx, ddfx]) {
        return Err(MultipleRootsError::DerivativeNotFinite { x, dfx, ddfx });
    }

    run.record(
        IterationRecord::new(0)
            .with("x", x)
            .with("f(x)", fx)
            .with("f'(x)", dfx)
            .with("f''(x)", ddfx),
    );
    if fx == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x, fx)));
    }

    let mut last_error = None;
    for iter in 1..=cfg.max_iter() {
        let x_next = match calculate_modified_newton(x, fx, dfx, ddfx) {
            Ok(v)  => v,
            Err(d) => {
                return Ok(run.finish(Finish::new(Termination::Degenerate(d), iter - 1).error(last_error)));
            }
        };
        let (fx_next, dfx_next, ddfx_next) = if x_next.is_finite() {
            (run.eval(&mut f, x_next), run.eval(&mut df, x_next), run.eval(&mut ddf, x_next))
        } else {
            (f64::NAN, f64::NAN, f64::NAN)
        };
        if !all_finite(&[x_next, fx_next, dfx_next, ddfx_next]) {
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).error(last_error)
            ));
        }

        let error = cfg.error_kind().between(x_next, x);
        let row = IterationRecord::new(iter)
            .with("x", x_next)
            .with("f(x)", fx_next)
            .with("f'(x)", dfx_next)
            .with("f''(x)", ddfx_next)
            .with_error(Some(error));
        (x, fx, dfx, ddfx) = (x_next, fx_next, dfx_next, ddfx_next);
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
