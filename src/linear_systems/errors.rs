//! Linear-system error types.
//!
//! ┌ [`LinearSystemError`] : malformed input (shape, finiteness)
//! ├ [`DirectSolveError`]  : elimination failures (zero pivot, singular column)
//! └ [`IterativeError`]    : iterative-solver configuration and zero diagonal


use thiserror::Error;


/// Shape and finiteness errors for `A x = b`.
#[derive(Debug, Error, PartialEq)]
pub enum LinearSystemError {
    #[error("empty matrix: need n >= 1")]
    EmptyMatrix,

    #[error("matrix is not square: row {row} has {len} entries, expected {n}")]
    NotSquare { n: usize, row: usize, len: usize },

    #[error("dimension mismatch: A is {n}x{n} but b has {b_len} entries")]
    DimensionMismatch { n: usize, b_len: usize },

    #[error("non-finite entry in {what} at ({row}, {col})")]
    NonFinite { what: &'static str, row: usize, col: usize },
}


/// Gaussian elimination errors.
///
/// ┌ Zero pivot without row exchanges ([`PivotMode::None`](super::direct::PivotMode::None))
/// ├ Whole remaining column (or submatrix) negligible; matrix singular
/// └ Back substitution produced a non-finite value
#[derive(Debug, Error, PartialEq)]
pub enum DirectSolveError {
    #[error(transparent)]
    System(#[from] LinearSystemError),

    #[error("division by zero: pivot at stage {stage} is {pivot}; try partial or total pivoting")]
    ZeroPivot { stage: usize, pivot: f64 },

    #[error("singular matrix: no usable pivot at stage {stage}")]
    Singular { stage: usize },

    #[error("back substitution produced a non-finite value at row {row}")]
    NonFiniteSolution { row: usize },
}


/// Iterative-solver errors, all raised before the first sweep.
#[derive(Debug, Error, PartialEq)]
pub enum IterativeError {
    #[error(transparent)]
    System(#[from] LinearSystemError),

    #[error("zero diagonal entry a[{row}][{row}]: D is not invertible")]
    ZeroDiagonal { row: usize },

    #[error("initial guess has {got} entries, expected {expected}")]
    InitialGuessLength { expected: usize, got: usize },

    #[error("non-finite entry in initial guess at index {idx}")]
    NonFiniteGuess { idx: usize },

    #[error("invalid `tolerance`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid relaxation factor: need 0 < omega < 2. got {got}")]
    InvalidOmega { got: f64 },
}
