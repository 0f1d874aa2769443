//! Incremental search.
//!
//! Steps `x0, x0 + δ, x0 + 2δ, ...` until `f` changes sign between two
//! consecutive points. No tolerance is involved; the result is the first
//! bracket found, with its midpoint reported as the root estimate.

use thiserror::Error;
use tracing::instrument;

use super::algorithms::Algorithm;
use super::config::DEFAULT_MAX_ITER;
use super::errors::RootFindingError;
use super::report::{Finish, RootResult, Run, Termination};
use super::signs::opposite_sign;
use super::tolerances::finite_seed;
use crate::trace::{ErrorKind, IterationRecord};

const ALGORITHM: Algorithm = Algorithm::IncrementalSearch;


#[derive(Debug, Error, PartialEq)]
pub enum IncrementalError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid step: delta must be finite and non-zero. got {got}")]
    InvalidDelta { got: f64 },
}


/// Incremental search configuration.
///
/// - `max_iter` : number of steps to scan (default 100)
#[derive(Debug, Copy, Clone)]
pub struct IncrementalCfg {
    max_iter: usize,
}
impl IncrementalCfg {
    #[must_use]
    pub fn new() -> Self { Self { max_iter: DEFAULT_MAX_ITER } }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    pub fn max_iter(&self) -> usize { self.max_iter }
}
impl Default for IncrementalCfg {
    fn default() -> Self { Self::new() }
}


/// Scans for a sign change of `func` starting at `x0` with step `delta`.
///
/// # Returns
///
/// Trace rows hold `x0, x1, f(x0), f(x1), f(x0)*f(x1)` with the note
/// `"same sign"`, `"sign change"` or `"exact root"`.
/// ├ [`Termination::BracketFound`]   : sign change in `[x0, x1]`, root = midpoint
/// ├ [`Termination::ExactRoot`]      : `f` is exactly zero at a scanned point
/// ├ [`Termination::IterationLimit`] : no sign change within `max_iter` steps
/// └ [`Termination::Diverged`]       : `f` non-finite at a scanned point
///
/// # Errors
///
/// ┌ [`IncrementalError::InvalidDelta`]        - `delta` zero or non-finite.
/// ├ [`RootFindingError::NonFiniteSeed`]       - `x0` non-finite.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `f(x0)` non-finite.
#[instrument(skip(func, cfg), fields(algorithm = "incremental_search"))]
pub fn incremental_search<F>(
    mut func: F,
    x0: f64,
    delta: f64,
    cfg: IncrementalCfg,
) -> Result<RootResult, IncrementalError>
where F: FnMut(f64) -> f64 {

    if !delta.is_finite() || delta == 0.0 {
        return Err(IncrementalError::InvalidDelta { got: delta });
    }
    let mut x0 = finite_seed("x0", x0)?;
    let mut run = Run::new(ALGORITHM, ErrorKind::Absolute);
    let mut f0 = run.eval_seed(&mut func, x0)?;

    if f0 == 0.0 {
        return Ok(run.finish(Finish::new(Termination::ExactRoot, 0).at(x0, f0)));
    }

    for iter in 1..=cfg.max_iter {
        let x1 = x0 + delta;
        let f1 = run.eval(&mut func, x1);
        if !f1.is_finite() {
            return Ok(run.finish(Finish::new(Termination::Diverged { step: iter }, iter - 1)));
        }
        let product = f0 * f1;
        let row = IterationRecord::new(iter)
            .with("x0", x0)
            .with("x1", x1)
            .with("f(x0)", f0)
            .with("f(x1)", f1)
            .with("f(x0)*f(x1)", product);

        if f1 == 0.0 {
            run.record(row.with_note("exact root"));
            return Ok(run.finish(
                Finish::new(Termination::ExactRoot, iter).at(x1, f1).bracket(x0, x1)
            ));
        }
        if opposite_sign(f0, f1) {
            run.record(row.with_note("sign change"));
            let xm = 0.5 * (x0 + x1);
            let fm = run.eval(&mut func, xm);
            return Ok(run.finish(
                Finish::new(Termination::BracketFound, iter).at(xm, fm).bracket(x0, x1)
            ));
        }
        run.record(row.with_note("same sign"));

        x0 = x1;
        f0 = f1;
    }

    Ok(run.finish(Finish::new(Termination::IterationLimit, cfg.max_iter)))
}
