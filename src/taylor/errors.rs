use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TaylorError {
    #[error("theta must be finite, got {got}")]
    NonFiniteTheta { got: f64 },

    #[error("invalid tolerance {got}: must be finite and > 0")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_terms {got}: must be >= 1")]
    InvalidMaxTerms { got: usize },
}
