//! Secant method

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::{impl_common_cfg, impl_with_common, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::precision::Precision;
use super::report::{Degeneracy, Finish, RootResult, Run, Termination};
use super::tolerances::{
    all_finite, finite_seed, residual_converged, step_converged, DENOMINATOR_EPS, SEED_SEPARATION,
};
use crate::trace::IterationRecord;

const ALGORITHM: Algorithm = Algorithm::Secant;


#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("initial guesses must differ: x0={x0}, x1={x1}")]
    CoincidentSeeds { x0: f64, x1: f64 },
}


/// Secant configuration. Same knobs as [`NewtonCfg`](super::newton::NewtonCfg).
#[derive(Debug, Copy, Clone, Default)]
pub struct SecantCfg {
    common: CommonCfg,
    precision: Option<Precision>,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), precision: None } }

    pub fn set_precision(mut self, v: Precision) -> Result<Self, ToleranceError> {
        self.precision = Some(v.validate()?);
        Ok(self)
    }

    pub fn precision(&self) -> Option<Precision> { self.precision }
}
impl_common_cfg!(SecantCfg);
impl_with_common!(SecantCfg);


/// Secant update through `(x0, f0)` and `(x1, f1)`.
#[inline]
fn calculate_secant(
    (x0, f0): (f64, f64),
    (x1, f1): (f64, f64),
) -> Result<f64, Degeneracy> {
    let denominator = f1 - f0;
    if denominator.abs() < DENOMINATOR_EPS {
        return Err(Degeneracy::ZeroDenominator { x: x1, denominator });
    }
    Ok(x1 - f1 * (x1 - x0) / denominator)
}


/// Finds a root using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method),
/// `x_{n+1} = x_n - f(x_n) (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`.
///
/// # Returns
///
/// Rows 0 and 1 are the two seeds; row `n` holds `x_n, f(x_n)` and the step
/// error. `iteration_count` counts only the update steps.
/// ├ [`Termination::Degenerate`] : `|f(x_n) - f(x_{n-1})| < DENOMINATOR_EPS`
/// └ otherwise as for [`newton`](super::newton::newton)
///
/// # Errors
///
/// ┌ [`RootFindingError::NonFiniteSeed`]       - `x0` or `x1` non-finite.
/// ├ [`SecantError::CoincidentSeeds`]          - `|x1 - x0| < SEED_SEPARATION`.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f` non-finite at a seed.
#[instrument(skip(f, cfg), fields(algorithm = "secant"))]
pub fn secant<F>(
    mut f: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<RootResult, SecantError>
where F: FnMut(f64) -> f64 {

    let precision = cfg.precision;
    let cfg = *cfg.common();
    let mut x_prev = finite_seed("x0", x0)?;
    let mut x      = finite_seed("x1", x1)?;
    if (x - x_prev).abs() < SEED_SEPARATION {
        return Err(SecantError::CoincidentSeeds { x0, x1 });
    }

    let mut run = Run::new(ALGORITHM, cfg.error_kind()).with_precision(precision);
    let mut f_prev = run.eval_seed(&mut f, x_prev)?;
    let mut fx     = run.eval_seed(&mut f, x)?;

    run.record(IterationRecord::new(0).with("x", x_prev).with("f(x)", f_prev));
    if f_prev == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x_prev, f_prev)));
    }
    run.record(IterationRecord::new(1).with("x", x).with("f(x)", fx));
    if fx == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x, fx)));
    }

    let mut last_error = None;
    for iter in 1..=cfg.max_iter() {
        let x_next = match calculate_secant((x_prev, f_prev), (x, fx)) {
            Ok(v)  => v,
            Err(d) => {
                return Ok(run.finish(Finish::new(Termination::Degenerate(d), iter - 1).error(last_error)));
            }
        };
        let fx_next = if x_next.is_finite() { run.eval(&mut f, x_next) } else { f64::NAN };
        if !all_finite(&[x_next, fx_next]) {
            return Ok(run.finish(
                Finish::new(Termination::Diverged { step: iter }, iter - 1).error(last_error)
            ));
        }

        let error = cfg.error_kind().between(x_next, x);
        let row = IterationRecord::new(iter + 1)
            .with("x", x_next)
            .with("f(x)", fx_next)
            .with_error(Some(error));
        (x_prev, f_prev) = (x, fx);
        (x, fx) = (x_next, fx_next);
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
