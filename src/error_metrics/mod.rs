//! Error metrics.
//!
//! ┌ [`absolute_error`]        : `|exact - approx|`
//! ├ [`relative_error`]        : `|exact - approx| / |exact|`
//! ├ [`percentage_error`]      : relative error * 100
//! ├ [`relative_error_summary`]: all three at once
//! └ [`propagation::propagate`]: first-order propagation through `+ - * /`

pub mod errors;
pub mod propagation;

pub use errors::ErrorMetricsError;
pub use propagation::{propagate, Operation, Propagation};

use serde::Serialize;


#[inline]
pub(crate) fn check_finite(name: &'static str, v: f64) -> Result<f64, ErrorMetricsError> {
    if v.is_finite() { Ok(v) } else { Err(ErrorMetricsError::NonFinite { name, got: v }) }
}


/// `|exact - approx|`
pub fn absolute_error(approx: f64, exact: f64) -> Result<f64, ErrorMetricsError> {
    let approx = check_finite("approx", approx)?;
    let exact  = check_finite("exact", exact)?;
    Ok((exact - approx).abs())
}

/// `|exact - approx| / |exact|`
///
/// # Errors
/// - [`ErrorMetricsError::DivisionByZero`] when `exact == 0`
pub fn relative_error(approx: f64, exact: f64) -> Result<f64, ErrorMetricsError> {
    let abs = absolute_error(approx, exact)?;
    if exact == 0.0 {
        return Err(ErrorMetricsError::DivisionByZero {
            context: "relative error is undefined for an exact value of 0",
        });
    }
    Ok(abs / exact.abs())
}

pub fn percentage_error(approx: f64, exact: f64) -> Result<f64, ErrorMetricsError> {
    Ok(relative_error(approx, exact)? * 100.0)
}


/// Absolute, relative and percentage error of one approximation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub approx     : f64,
    pub exact      : f64,
    pub absolute   : f64,
    pub relative   : f64,
    pub percentage : f64,
}

pub fn relative_error_summary(approx: f64, exact: f64) -> Result<ErrorSummary, ErrorMetricsError> {
    let absolute = absolute_error(approx, exact)?;
    let relative = relative_error(approx, exact)?;
    Ok(ErrorSummary { approx, exact, absolute, relative, percentage: relative * 100.0 })
}
