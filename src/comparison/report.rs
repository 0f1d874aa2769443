//! Defines the [`ComparisonReport`] produced by both comparison harnesses.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::notes::MethodNotes;
use crate::linear_systems::iterative::IterativeSolveResult;
use crate::root_finding::RootResult;
use crate::trace::serialize_secs;


/// What the harness needs to know about any method's result.
pub trait MethodOutcome {
    fn succeeded(&self) -> bool;
    fn iterations(&self) -> usize;
    fn message(&self) -> &str;
}

impl MethodOutcome for RootResult {
    fn succeeded(&self) -> bool { self.success }
    fn iterations(&self) -> usize { self.iteration_count }
    fn message(&self) -> &str { &self.message }
}

impl MethodOutcome for IterativeSolveResult {
    fn succeeded(&self) -> bool { self.success }
    fn iterations(&self) -> usize { self.iteration_count }
    fn message(&self) -> &str { &self.message }
}


/// One method's run inside a comparison.
///
/// [`MethodEntry`]
/// - `method`     : display name, the key used by the report
/// - `success`    : the method converged
/// - `iterations` : iterations performed (0 when the input was rejected)
/// - `elapsed`    : wall-clock time of the call, serialized in seconds
/// - `message`    : the method's own message, or the rejection reason
/// - `result`     : full result; `None` when the method rejected its input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodEntry<R> {
    pub method     : String,
    pub success    : bool,
    pub iterations : usize,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed    : Duration,
    pub message    : String,
    pub result     : Option<R>,
}

impl<R: MethodOutcome> MethodEntry<R> {
    /// Times `call` and records its outcome; an `Err` becomes a failed entry.
    pub(crate) fn timed<E: Display>(method: &str, call: impl FnOnce() -> Result<R, E>) -> Self {
        let started = Instant::now();
        let outcome = call();
        let elapsed = started.elapsed();

        match outcome {
            Ok(r) => Self {
                method     : method.to_string(),
                success    : r.succeeded(),
                iterations : r.iterations(),
                elapsed,
                message    : r.message().to_string(),
                result     : Some(r),
            },
            Err(e) => {
                tracing::warn!(method, error = %e, "method rejected its input");
                Self {
                    method     : method.to_string(),
                    success    : false,
                    iterations : 0,
                    elapsed,
                    message    : format!("error: {e}"),
                    result     : None,
                }
            }
        }
    }
}


/// Ranking of several methods run on one problem.
///
/// [`ComparisonReport`]
/// - `results`                  : one entry per method that had the inputs it needs, in run order
/// - `fastest_method`           : quickest successful method
/// - `fewest_iterations_method` : successful method with the fewest iterations
/// - `success_count`            : methods that converged
/// - `total_count`              : methods run
/// - `summary`                  : `"k of n methods converged"`
/// - `recommendation`           : which method to prefer and why
/// - `convergence_note`         : observation on the convergence behaviour, if any
/// - `notes`                    : static notes per method name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport<R> {
    pub results                  : Vec<MethodEntry<R>>,
    pub fastest_method           : Option<String>,
    pub fewest_iterations_method : Option<String>,
    pub success_count            : usize,
    pub total_count              : usize,
    pub summary                  : String,
    pub recommendation           : String,
    pub convergence_note         : Option<String>,
    pub notes                    : BTreeMap<String, MethodNotes>,
}

impl<R> ComparisonReport<R> {
    pub(crate) fn rank(
        results: Vec<MethodEntry<R>>,
        notes: BTreeMap<String, MethodNotes>,
        convergence_note: Option<String>,
    ) -> Self {
        let successful = || results.iter().filter(|e| e.success);

        // min_by_key keeps the first of equal keys, so ties go to run order
        let fastest = successful().min_by_key(|e| e.elapsed).map(|e| e.method.clone());
        let fewest  = successful().min_by_key(|e| e.iterations).map(|e| e.method.clone());

        let success_count = successful().count();
        let total_count = results.len();

        let recommendation = match (&fastest, &fewest) {
            (Some(f), Some(i)) if f == i => format!(
                "{f} was the most efficient method: fastest and fewest iterations. \
                 It is the best choice for this problem."
            ),
            (Some(f), Some(i)) => format!(
                "{f} was the fastest, but {i} needed fewer iterations. \
                 Prefer one or the other depending on whether wall-clock time or \
                 iteration count matters more."
            ),
            _ => "No method converged. Check the starting values, the interval or \
                  the stopping parameters."
                .to_string(),
        };

        tracing::info!(success_count, total_count, fastest = ?fastest, "comparison ranked");

        Self {
            summary: format!("{success_count} of {total_count} methods converged"),
            results,
            fastest_method: fastest,
            fewest_iterations_method: fewest,
            success_count,
            total_count,
            recommendation,
            convergence_note,
            notes,
        }
    }

    /// Entry for `method`, by display name.
    pub fn entry(&self, method: &str) -> Option<&MethodEntry<R>> {
        self.results.iter().find(|e| e.method == method)
    }
}
