//! The [`Response`] envelope every request produces.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::comparison::ComparisonReport;
use crate::error_metrics::{ErrorSummary, Propagation};
use crate::interpolation::InterpolationReport;
use crate::linear_systems::direct::{DirectSolveResult, ValidationReport};
use crate::linear_systems::iterative::IterativeSolveResult;
use crate::root_finding::RootResult;
use crate::taylor::TaylorReport;


/// Response to one request.
///
/// - `success` : the operation ran and reached its goal
/// - `message` : human-readable outcome or error
/// - `data`    : the serialized result; `null` on error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success : bool,
    pub message : String,
    pub data    : Value,
}

impl Response {
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), data: Value::Null }
    }

    /// Serializes `value`; success and message come from its [`Summary`].
    pub(crate) fn from_summary<T: Summary + Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self { success: value.success(), message: value.message(), data },
            Err(e)   => Self::failure(format!("result could not be serialized: {e}")),
        }
    }

    /// `Ok` results via [`Response::from_summary`], errors as failures.
    pub(crate) fn from_result<T, E>(outcome: Result<T, E>) -> Self
    where
        T: Summary + Serialize,
        E: Display,
    {
        match outcome {
            Ok(value) => Self::from_summary(&value),
            Err(e) => {
                tracing::warn!(error = %e, "request rejected");
                Self::failure(e.to_string())
            }
        }
    }
}


/// Success flag and message of a result, for the response envelope.
pub(crate) trait Summary {
    fn success(&self) -> bool;
    fn message(&self) -> String;
}

impl Summary for RootResult {
    fn success(&self) -> bool { self.success }
    fn message(&self) -> String { self.message.clone() }
}

impl Summary for IterativeSolveResult {
    fn success(&self) -> bool { self.success }
    fn message(&self) -> String { self.message.clone() }
}

impl Summary for DirectSolveResult {
    fn success(&self) -> bool { true }
    fn message(&self) -> String { self.message.clone() }
}

impl Summary for ValidationReport {
    fn success(&self) -> bool { self.valid }
    fn message(&self) -> String { self.message.clone() }
}

impl Summary for InterpolationReport {
    fn success(&self) -> bool { true }
    fn message(&self) -> String { self.message.clone() }
}

impl Summary for TaylorReport {
    fn success(&self) -> bool { self.converged }
    fn message(&self) -> String { self.message.clone() }
}

impl<R> Summary for ComparisonReport<R> {
    fn success(&self) -> bool { self.success_count > 0 }
    fn message(&self) -> String { format!("{}. {}", self.summary, self.recommendation) }
}

impl Summary for ErrorSummary {
    fn success(&self) -> bool { true }
    fn message(&self) -> String {
        format!(
            "absolute error {}, relative error {}, percentage error {}%",
            self.absolute, self.relative, self.percentage
        )
    }
}

impl Summary for Propagation {
    fn success(&self) -> bool { true }
    fn message(&self) -> String {
        format!("result {} ± {}", self.value, self.abs_error)
    }
}

/// A bare error value such as `absolute_error`'s.
impl Summary for f64 {
    fn success(&self) -> bool { self.is_finite() }
    fn message(&self) -> String { self.to_string() }
}
