//! Iteration traces shared by every iterative method.
//!
//! ┌ [`ErrorKind`]       : how the step error between successive iterates is measured
//! └ [`IterationRecord`] : one row of a method's trace (named values, error, note)

use std::time::Duration;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Below this magnitude the relative error falls back to the absolute one.
pub const RELATIVE_FALLBACK_THRESHOLD: f64 = 1e-12;


/// Error measure used for stopping decisions.
///
/// - [`ErrorKind::Absolute`] : `|x_new - x_old|`
/// - [`ErrorKind::Relative`] : `|x_new - x_old| / |x_new|`
///   (absolute when `|x_new| < RELATIVE_FALLBACK_THRESHOLD`)
///
/// For vectors the component-wise maximum is used in both numerator and
/// denominator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    #[default]
    #[serde(alias = "absoluto")]
    Absolute,
    #[serde(alias = "relativo")]
    Relative,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Absolute => "absolute",
            ErrorKind::Relative => "relative",
        }
    }

    /// Error between two successive scalar iterates.
    #[inline]
    pub fn between(self, current: f64, previous: f64) -> f64 {
        let diff = (current - previous).abs();
        match self {
            ErrorKind::Absolute => diff,
            ErrorKind::Relative => {
                if current.abs() < RELATIVE_FALLBACK_THRESHOLD {
                    diff
                } else {
                    diff / current.abs()
                }
            }
        }
    }

    /// Error between two successive vector iterates (max-component norm).
    pub fn between_vectors(self, current: &[f64], previous: &[f64]) -> f64 {
        let diff = current
            .iter()
            .zip(previous)
            .map(|(c, p)| (c - p).abs())
            .fold(0.0, f64::max);

        match self {
            ErrorKind::Absolute => diff,
            ErrorKind::Relative => {
                let scale = current.iter().map(|c| c.abs()).fold(0.0, f64::max);
                if scale < RELATIVE_FALLBACK_THRESHOLD { diff } else { diff / scale }
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Named numeric quantities of one iteration, in insertion order.
///
/// Serialized as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(Vec<(String, f64)>);

impl Values {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == name).map(|&(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    fn push(&mut self, name: String, value: f64) {
        self.0.push((name, value));
    }
}

impl Serialize for Values {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}


/// One row of an iteration trace.
///
/// [`IterationRecord`]
/// - `index`  : iteration number (0 is the seed row where a method records one)
/// - `values` : named quantities, e.g. `xi, xs, xm, f(xm)`
/// - `error`  : step error, `None` when there is no previous iterate
/// - `note`   : short label such as `"sign change"` or `"exact root"`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    pub index  : usize,
    pub values : Values,
    pub error  : Option<f64>,
    pub note   : Option<&'static str>,
}

impl IterationRecord {
    pub fn new(index: usize) -> Self {
        Self { index, values: Values::default(), error: None, note: None }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.push(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: Option<f64>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Shorthand for `self.values.get(name)`.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name)
    }
}


/// Serializes a [`Duration`] as fractional seconds.
pub(crate) fn serialize_secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}
