//! Truncated Maclaurin series for `cos` and `sin`.
//!
//! ```text
//! cos θ = Σ (-1)^k θ^(2k)   / (2k)!
//! sin θ = Σ (-1)^k θ^(2k+1) / (2k+1)!
//! ```
//!
//! Terms are generated by the ratio `t_k = -t_{k-1} θ² / (m (m + 1))` rather
//! than explicit powers and factorials. Summation stops once the change
//! between successive partial sums is within tolerance or `max_terms` terms
//! have been added.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::errors::TaylorError;
use crate::trace::ErrorKind;

pub const DEFAULT_TOLERANCE : f64   = 1e-8;
pub const DEFAULT_MAX_TERMS : usize = 1000;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Cos,
    Sin,
}

impl Series {
    pub const fn name(self) -> &'static str {
        match self {
            Series::Cos => "cos",
            Series::Sin => "sin",
        }
    }

    fn first_term(self, theta: f64) -> f64 {
        match self {
            Series::Cos => 1.0,
            Series::Sin => theta,
        }
    }

    /// `m` in `t_k = -t_{k-1} θ² / (m (m + 1))`.
    fn ratio_base(self, k: usize) -> f64 {
        match self {
            Series::Cos => (2 * k - 1) as f64,
            Series::Sin => (2 * k) as f64,
        }
    }

    fn exact(self, theta: f64) -> f64 {
        match self {
            Series::Cos => theta.cos(),
            Series::Sin => theta.sin(),
        }
    }
}


/// Taylor series configuration.
///
/// # Defaults
///
/// ┌ tolerance  = 1e-8
/// ├ max_terms  = 1000
/// └ error_kind = absolute
#[derive(Debug, Copy, Clone)]
pub struct TaylorCfg {
    tolerance  : f64,
    max_terms  : usize,
    error_kind : ErrorKind,
}
impl TaylorCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance  : DEFAULT_TOLERANCE,
            max_terms  : DEFAULT_MAX_TERMS,
            error_kind : ErrorKind::Absolute,
        }
    }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, TaylorError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(TaylorError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_terms(mut self, v: usize) -> Result<Self, TaylorError> {
        if v == 0 {
            return Err(TaylorError::InvalidMaxTerms { got: v });
        }
        self.max_terms = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_error_kind(mut self, v: ErrorKind) -> Self {
        self.error_kind = v;
        self
    }

    pub fn tolerance(&self)  -> f64       { self.tolerance }
    pub fn max_terms(&self)  -> usize     { self.max_terms }
    pub fn error_kind(&self) -> ErrorKind { self.error_kind }
}
impl Default for TaylorCfg {
    fn default() -> Self { Self::new() }
}


/// Outcome of a truncated series evaluation.
///
/// [`TaylorReport`]
/// - `series`         : which function was expanded
/// - `theta`          : argument in radians
/// - `approximation`  : last partial sum
/// - `exact`          : library value of the function
/// - `partial_sums`   : `S_0, S_1, ...`
/// - `errors`         : change between successive partial sums, one per added term
/// - `terms_used`     : number of terms summed
/// - `converged`      : final error within tolerance
/// - `final_error`    : last entry of `errors`; `None` with a single term
/// - `difference`     : `|approximation - exact|`
/// - `tolerance`      : tolerance used
/// - `error_kind`     : absolute or relative change
/// - `message`        : human-readable outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaylorReport {
    pub series        : Series,
    pub theta         : f64,
    pub approximation : f64,
    pub exact         : f64,
    pub partial_sums  : Vec<f64>,
    pub errors        : Vec<f64>,
    pub terms_used    : usize,
    pub converged     : bool,
    pub final_error   : Option<f64>,
    pub difference    : f64,
    pub tolerance     : f64,
    pub error_kind    : ErrorKind,
    pub message       : String,
}


fn expand(series: Series, theta: f64, cfg: TaylorCfg) -> Result<TaylorReport, TaylorError> {
    if !theta.is_finite() {
        return Err(TaylorError::NonFiniteTheta { got: theta });
    }

    let mut term = series.first_term(theta);
    let mut sum = term;
    let mut partial_sums = vec![sum];
    let mut errors = Vec::new();
    let mut converged = false;

    for k in 1..cfg.max_terms {
        let m = series.ratio_base(k);
        term *= -theta * theta / (m * (m + 1.0));
        let next = sum + term;
        if !next.is_finite() {
            break;
        }
        let error = cfg.error_kind.between(next, sum);
        tracing::debug!(series = series.name(), k, sum = next, error, "term added");

        partial_sums.push(next);
        errors.push(error);
        sum = next;
        if error <= cfg.tolerance {
            converged = true;
            break;
        }
    }

    let exact = series.exact(theta);
    let terms_used = partial_sums.len();
    let message = if converged {
        tracing::info!(series = series.name(), terms_used, "series converged");
        format!("{}({theta}) ≈ {sum} using {terms_used} terms", series.name())
    } else {
        tracing::warn!(series = series.name(), terms_used, "series stopped before tolerance");
        format!(
            "{}({theta}): tolerance not reached after {terms_used} terms; last partial sum {sum}",
            series.name()
        )
    };

    Ok(TaylorReport {
        series,
        theta,
        approximation : sum,
        exact,
        final_error   : errors.last().copied(),
        partial_sums,
        errors,
        terms_used,
        converged,
        difference    : (sum - exact).abs(),
        tolerance     : cfg.tolerance,
        error_kind    : cfg.error_kind,
        message,
    })
}


/// Approximates `cos(theta)`.
///
/// # Errors
/// - [`TaylorError::NonFiniteTheta`] : `theta` is NaN or infinite
#[instrument(skip(cfg))]
pub fn cos(theta: f64, cfg: TaylorCfg) -> Result<TaylorReport, TaylorError> {
    expand(Series::Cos, theta, cfg)
}


/// Approximates `sin(theta)`.
///
/// # Errors
/// - [`TaylorError::NonFiniteTheta`] : `theta` is NaN or infinite
#[instrument(skip(cfg))]
pub fn sin(theta: f64, cfg: TaylorCfg) -> Result<TaylorReport, TaylorError> {
    expand(Series::Sin, theta, cfg)
}
