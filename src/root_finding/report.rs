//! Defines the [`RootResult`] struct returned by all root-finding algorithms,
//! and the private [`Run`] accumulator the algorithms fill while iterating.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::algorithms::Algorithm;
use super::errors::RootFindingError;
use super::precision::Precision;
use crate::trace::{serialize_secs, ErrorKind, IterationRecord};


/// Numeric degeneracies that stop an iteration early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degeneracy {
    /// `f(xi) * f(xs) > 0` on the starting bracket.
    NoSignChange     { xi: f64, xs: f64, fi: f64, fs: f64 },
    /// `|f'(x)|` below [`DERIVATIVE_EPS`](super::tolerances::DERIVATIVE_EPS).
    ZeroDerivative   { x: f64, dfx: f64 },
    /// Update-formula denominator below
    /// [`DENOMINATOR_EPS`](super::tolerances::DENOMINATOR_EPS).
    ZeroDenominator  { x: f64, denominator: f64 },
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degeneracy::NoSignChange { xi, xs, fi, fs } => write!(
                f, "function does not change sign on [{xi}, {xs}]: f(xi)={fi}, f(xs)={fs}"
            ),
            Degeneracy::ZeroDerivative { x, dfx } => write!(
                f, "derivative vanishes at x={x} (f'(x)={dfx}); cannot continue"
            ),
            Degeneracy::ZeroDenominator { x, denominator } => write!(
                f, "denominator vanishes at x={x} (denominator={denominator}); cannot continue"
            ),
        }
    }
}


/// Reasons a root-finding algorithm may terminate.
///
/// - [`Termination::ToleranceReached`]         : step error below tolerance
/// - [`Termination::ResidualReached`]          : `|f(x)| <= abs_fx`
/// - [`Termination::ExactRoot`]                : `f(x) == 0` exactly
/// - [`Termination::BracketFound`]             : incremental search saw a sign change
/// - [`Termination::FixedIterationsCompleted`] : fixed-iteration mode ran to the end
/// - [`Termination::IterationLimit`]           : `max_iter` exhausted
/// - [`Termination::Degenerate`]               : see [`Degeneracy`]
/// - [`Termination::Diverged`]                 : NaN / infinity appeared
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum Termination {
    ToleranceReached,
    ResidualReached,
    ExactRoot,
    BracketFound,
    FixedIterationsCompleted,
    IterationLimit,
    Degenerate(Degeneracy),
    Diverged { step: usize },
}

impl Termination {
    pub const fn is_success(&self) -> bool {
        matches!(
            self,
            Termination::ToleranceReached
                | Termination::ResidualReached
                | Termination::ExactRoot
                | Termination::BracketFound
                | Termination::FixedIterationsCompleted
        )
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootResult`]
/// - `algorithm`       : which method produced it
/// - `success`         : derived from `termination`
/// - `root`            : best estimate; `None` after degeneracy or divergence
/// - `f_root`          : `f(root)` when known
/// - `bracket`         : final sign-change interval (bracketing and scan methods)
/// - `message`         : human-readable outcome
/// - `iterations`      : ordered trace; `index` is the subscript of the iterate
/// - `iteration_count` : number of update steps performed
/// - `evaluations`     : total function (and derivative) evaluations
/// - `final_error`     : last step error, if any
/// - `elapsed`         : wall-clock duration, serialized in seconds
/// - `error_kind`      : absolute or relative step error
/// - `termination`     : why the solver stopped ([`Termination`])
/// - `formatted_root`  : root rendered with the requested display precision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootResult {
    pub algorithm       : Algorithm,
    pub success         : bool,
    pub root            : Option<f64>,
    pub f_root          : Option<f64>,
    pub bracket         : Option<[f64; 2]>,
    pub message         : String,
    pub iterations      : Vec<IterationRecord>,
    pub iteration_count : usize,
    pub evaluations     : usize,
    pub final_error     : Option<f64>,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed         : Duration,
    pub error_kind      : ErrorKind,
    pub termination     : Termination,
    pub formatted_root  : Option<String>,
}


/// Accumulates a run's trace, evaluation count and timing.
pub(crate) struct Run {
    algorithm   : Algorithm,
    error_kind  : ErrorKind,
    started     : Instant,
    trace       : Vec<IterationRecord>,
    evaluations : usize,
    precision   : Option<Precision>,
}

/// Terminal state handed to [`Run::finish`].
pub(crate) struct Finish {
    pub termination : Termination,
    pub root        : Option<f64>,
    pub f_root      : Option<f64>,
    pub bracket     : Option<[f64; 2]>,
    pub steps       : usize,
    pub final_error : Option<f64>,
}

impl Finish {
    pub fn new(termination: Termination, steps: usize) -> Self {
        Self { termination, root: None, f_root: None, bracket: None, steps, final_error: None }
    }

    pub fn at(mut self, root: f64, f_root: f64) -> Self {
        self.root   = Some(root);
        self.f_root = Some(f_root);
        self
    }

    pub fn bracket(mut self, a: f64, b: f64) -> Self {
        self.bracket = Some([a.min(b), a.max(b)]);
        self
    }

    pub fn error(mut self, e: Option<f64>) -> Self {
        self.final_error = e;
        self
    }
}

impl Run {
    pub fn new(algorithm: Algorithm, error_kind: ErrorKind) -> Self {
        Self {
            algorithm,
            error_kind,
            started     : Instant::now(),
            trace       : Vec::new(),
            evaluations : 0,
            precision   : None,
        }
    }

    pub fn with_precision(mut self, precision: Option<Precision>) -> Self {
        self.precision = precision;
        self
    }

    /// Evaluates `f(x)` and counts it.
    #[inline]
    pub fn eval<F: FnMut(f64) -> f64>(&mut self, f: &mut F, x: f64) -> f64 {
        self.evaluations += 1;
        f(x)
    }

    /// Evaluates `f` at a seed; a non-finite value is an input error.
    pub fn eval_seed<F: FnMut(f64) -> f64>(
        &mut self, f: &mut F, x: f64
    ) -> Result<f64, RootFindingError> {
        let fx = self.eval(f, x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }

    pub fn record(&mut self, record: IterationRecord) {
        tracing::debug!(
            algorithm = self.algorithm.algorithm_name(),
            index = record.index,
            error = ?record.error,
            "iteration"
        );
        self.trace.push(record);
    }

    pub fn finish(self, finish: Finish) -> RootResult {
        let Finish { termination, root, f_root, bracket, steps, final_error } = finish;
        let success = termination.is_success();

        let formatted_root = match (self.precision, root) {
            (Some(p), Some(r)) => Some(p.format(r)),
            _                  => None,
        };
        let shown = formatted_root
            .clone()
            .or_else(|| root.map(|r| r.to_string()))
            .unwrap_or_default();

        let message = match &termination {
            Termination::ToleranceReached => format!(
                "{shown} is an approximate root ({} error below tolerance after {steps} iterations)",
                self.error_kind
            ),
            Termination::ResidualReached => format!(
                "{shown} is an approximate root (|f(x)| within abs_fx after {steps} iterations)"
            ),
            Termination::ExactRoot => format!("{shown} is an exact root"),
            Termination::BracketFound => match bracket {
                Some([a, b]) => format!("sign change found in [{a}, {b}] after {steps} steps"),
                None         => format!("sign change found after {steps} steps"),
            },
            Termination::FixedIterationsCompleted => format!(
                "{shown} is the estimate after the requested {steps} iterations"
            ),
            Termination::IterationLimit => match root {
                Some(_) => format!("did not converge within {steps} iterations; last estimate {shown}"),
                None    => format!("no sign change found within {steps} steps"),
            },
            Termination::Degenerate(d) => d.to_string(),
            Termination::Diverged { step } => format!(
                "iteration diverged at step {step}: a non-finite value appeared"
            ),
        };

        if success {
            tracing::info!(algorithm = self.algorithm.algorithm_name(), steps, %message, "converged");
        } else {
            tracing::warn!(algorithm = self.algorithm.algorithm_name(), steps, %message, "stopped without a root");
        }

        RootResult {
            algorithm       : self.algorithm,
            success,
            root,
            f_root,
            bracket,
            message,
            iterations      : self.trace,
            iteration_count : steps,
            evaluations     : self.evaluations,
            final_error,
            elapsed         : self.started.elapsed(),
            error_kind      : self.error_kind,
            termination,
            formatted_root,
        }
    }
}
