use thiserror::Error;

/// Error-metric failures.
///
/// ┌ Division by zero (relative error with exact = 0, quotient with y = 0)
/// ├ Non-finite operand
/// └ Unknown propagation operator
#[derive(Debug, Error, PartialEq)]
pub enum ErrorMetricsError {
    #[error("division by zero: {context}")]
    DivisionByZero { context: &'static str },

    #[error("non-finite operand `{name}`: got {got}")]
    NonFinite { name: &'static str, got: f64 },

    #[error("negative uncertainty `{name}`: got {got}")]
    NegativeUncertainty { name: &'static str, got: f64 },

    #[error("unsupported operation `{got}`: use +, -, *, / (or add, sub, mul, div)")]
    UnknownOperation { got: String },
}
