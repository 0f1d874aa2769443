use thiserror::Error;

use crate::linear_systems::DirectSolveError;

#[derive(Debug, Error, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("repeated x-values: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("evaluation point {got} out of bounds in [{x_min}, {x_max}]")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid degree {got}: must be >= 1")]
    InvalidDegree { got: usize },

    #[error("degree {degree} too high for {points} points; maximum feasible degree is {max}")]
    DegreeTooHigh { degree: usize, points: usize, max: usize },

    #[error("spline system is singular")]
    SingularSpline,

    #[error("coefficient system could not be solved: {0}")]
    Solve(#[from] DirectSolveError),
}
