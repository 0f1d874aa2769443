//! Stopping tests and numerical thresholds shared by root finders.
//!
//! ┌ [`DERIVATIVE_EPS`]  : |f'(x)| below this is treated as a zero derivative
//! ├ [`DENOMINATOR_EPS`] : secant / false-position / multiple-root denominators
//! └ [`SEED_SEPARATION`] : minimum |x1 - x0| for the secant seeds

use super::errors::RootFindingError;

pub const DERIVATIVE_EPS  : f64 = 1e-12;
pub const DENOMINATOR_EPS : f64 = 1e-12;
pub const SEED_SEPARATION : f64 = 1e-12;


/// Step error below the stopping tolerance.
#[inline]
pub(crate) fn step_converged(error: f64, tolerance: f64) -> bool {
    error < tolerance
}

/// `|f(x)| <= abs_fx` when a residual tolerance is configured.
#[inline]
pub(crate) fn residual_converged(fx: f64, abs_fx: Option<f64>) -> bool {
    matches!(abs_fx, Some(tol) if fx.abs() <= tol)
}

/// Both values finite; anything else means the iteration diverged.
#[inline]
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Rejects NaN / infinite seeds before any evaluation.
#[inline]
pub(crate) fn finite_seed(name: &'static str, x: f64) -> Result<f64, RootFindingError> {
    if x.is_finite() { Ok(x) } else { Err(RootFindingError::NonFiniteSeed { name, got: x }) }
}
