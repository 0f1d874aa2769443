//! First-order error propagation through the four arithmetic operations.
//!
//! With absolute uncertainties `ex`, `ey`:
//!
//! ```text
//! z = x ± y   ->  ez = ex + ey
//! z = x * y   ->  ez = |y| ex + |x| ey
//! z = x / y   ->  ez = (|y| ex + |x| ey) / y²
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::check_finite;
use super::errors::ErrorMetricsError;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[serde(alias = "+", alias = "suma", alias = "sum")]
    Add,
    #[serde(alias = "-", alias = "resta")]
    Sub,
    #[serde(alias = "*", alias = "producto")]
    Mul,
    #[serde(alias = "/", alias = "division")]
    Div,
}

impl Operation {
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '×',
            Operation::Div => '÷',
        }
    }
}

impl FromStr for Operation {
    type Err = ErrorMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "sum" | "suma"                => Ok(Operation::Add),
            "-" | "sub" | "resta"                       => Ok(Operation::Sub),
            "*" | "x" | "×" | "mul" | "producto"        => Ok(Operation::Mul),
            "/" | "÷" | "div" | "division" | "división" => Ok(Operation::Div),
            other => Err(ErrorMetricsError::UnknownOperation { got: other.to_string() }),
        }
    }
}


/// Result of propagating uncertainties through one operation.
///
/// - `value`          : `x op y`
/// - `abs_error`      : propagated absolute error
/// - `relative_error` : `abs_error / |value|`, 0 when `value == 0`
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Propagation {
    pub operation      : Operation,
    pub value          : f64,
    pub abs_error      : f64,
    pub relative_error : f64,
}


/// Propagates absolute errors `ex`, `ey` of `x`, `y` through `op`.
///
/// # Errors
/// - [`ErrorMetricsError::NonFinite`]           : any operand non-finite
/// - [`ErrorMetricsError::NegativeUncertainty`] : `ex < 0` or `ey < 0`
/// - [`ErrorMetricsError::DivisionByZero`]      : `op` is division and `y == 0`
pub fn propagate(
    x: f64,
    ex: f64,
    y: f64,
    ey: f64,
    op: Operation,
) -> Result<Propagation, ErrorMetricsError> {
    let x  = check_finite("x", x)?;
    let y  = check_finite("y", y)?;
    let ex = check_finite("ex", ex)?;
    let ey = check_finite("ey", ey)?;
    if ex < 0.0 {
        return Err(ErrorMetricsError::NegativeUncertainty { name: "ex", got: ex });
    }
    if ey < 0.0 {
        return Err(ErrorMetricsError::NegativeUncertainty { name: "ey", got: ey });
    }

    let (value, abs_error) = match op {
        Operation::Add => (x + y, ex + ey),
        Operation::Sub => (x - y, ex + ey),
        Operation::Mul => (x * y, y.abs() * ex + x.abs() * ey),
        Operation::Div => {
            if y == 0.0 {
                return Err(ErrorMetricsError::DivisionByZero {
                    context: "cannot propagate through a quotient with y = 0",
                });
            }
            (x / y, (y.abs() * ex + x.abs() * ey) / (y * y))
        }
    };

    let relative_error = if value == 0.0 { 0.0 } else { abs_error / value.abs() };

    Ok(Propagation { operation: op, value, abs_error, relative_error })
}
