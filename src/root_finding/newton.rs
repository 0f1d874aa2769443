//! Newton-Raphson method

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::precision::Precision;
use super::report::{Degeneracy, Finish, RootResult, Run, Termination};
use super::tolerances::{
    all_finite, finite_seed, residual_converged, step_converged, DERIVATIVE_EPS,
};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::Newton;


#[derive(Debug, Error, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common`    : [`CommonCfg`] with tolerance, `max_iter`, error kind, `abs_fx`.
/// - `precision` : optional display precision for the reported root.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
/// - [`NewtonCfg::set_precision`] only affects `formatted_root` and the message.
#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonCfg {
    common: CommonCfg,
    precision: Option<Precision>,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), precision: None } }

    pub fn set_precision(mut self, v: Precision) -> Result<Self, ToleranceError> {
        self.precision = Some(v.validate()?);
        Ok(self)
    }

    pub fn precision(&self) -> Option<Precision> { self.precision }
}
impl_common_cfg!(NewtonCfg);
impl_with_common!(NewtonCfg);


/// Finds a root using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method),
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
///
/// # Arguments
///
/// ┌ `f`   - The function whose root is to be found.
/// ├ `df`  - Its derivative.
/// ├ `x0`  - Initial guess.
/// └ `cfg` - See [`NewtonCfg`].
///
/// # Returns
///
/// Row 0 is the seed. Row `n` holds `x_n, f(x_n), f'(x_n)` and the step error.
/// ├ [`Termination::ToleranceReached`] / [`Termination::ResidualReached`]
/// ├ [`Termination::ExactRoot`]      : `f(x_n) == 0`
/// ├ [`Termination::Degenerate`]     : `|f'(x_n)| < DERIVATIVE_EPS`, trace kept up to `x_n`
/// ├ [`Termination::Diverged`]       : the next iterate or `f` there is non-finite
/// └ [`Termination::IterationLimit`] : `max_iter` steps without convergence
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]       - `x0` non-finite.
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `f(x0)` non-finite.
/// └ [`NewtonError::DerivativeNotFinite`]      - `f'(x0)` non-finite.
#[instrument(skip(f, df, cfg), fields(algorithm = "newton"))]
pub fn newton<F, D>(
    mut f: F,
    mut df: D,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootResult, NewtonError>
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    let precision = cfg.precision;
    let cfg = *cfg.common();
    let mut run = Run::new(ALGORITHM, cfg.error_kind()).with_precision(precision);

    let mut x   = finite_seed("x0", x0)?;
    let mut fx  = run.eval_seed(&mut f, x)?;
    let mut dfx = run.eval(&mut df, x);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    run.record(IterationRecord::new(0).with("x", x).with("f(x)", fx).with("f'(x)", dfx));
    if fx == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x, fx)));
    }

    let mut last_error = None;
    for iter in 1..=cfg.max_iter() {
        if dfx.abs() < DERIVATIVE_EPS {
            let d = Degeneracy::ZeroDerivative { x, dfx };
            return Ok(run.finish(Finish::new(Termination::Degenerate(d), iter - 1).error(last_error)));
        }

        let x_next = x - fx / dfx;
        let (fx_next, dfx_next) = if x_next.is_finite() {
            (run.eval(&mut f, x_next), run.eval(&mut df, x_next))
        } else {
            (f64::NAN, f64::NAN)
        };
        if !all_finite(&[x_next, fx_next, dfx_next]) {
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).error(last_error)
            ));
        }

        let error = cfg.error_kind().between(x_next, x);
        let row = IterationRecord::new(iter)
            .with("x", x_next)
            .with("f(x)", fx_next)
            .with("f'(x)", dfx_next)
            .with_error(Some(error));
        x   = x_next;
        fx  = fx_next;
        dfx = dfx_next;
        last_error = Some(error);

        if fx == 0.0 {
            run.record(row.with_note("exact root"));
            return Ok(run.finish(Finish::new(Termination::ExactRoot, iter).at(x, fx).error(last_error)));
        }
        run.record(row);

        if residual_converged(fx, cfg.abs_fx()) {
            return Ok(run.finish(Finish::new(Termination::ResidualReached, iter).at(x, fx).error(last_error)));
        }
        if step_converged(error, cfg.tolerance()) {
            return Ok(run.finish(Finish::new(Termination::ToleranceReached, iter).at(x, fx).error(last_error)));
        }
    }

    Ok(run.finish(Finish::new(Termination::IterationLimit, cfg.max_iter()).at(x, fx).error(last_error)))
}
