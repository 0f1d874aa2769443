//! Root-finding error types.
//!
//! Only problems detected before the first iteration are errors. Anything
//! that happens while iterating (no sign change, vanishing derivative,
//! divergence, iteration limit) is reported through
//! [`Termination`](super::report::Termination) on an `Ok` result.
//!
//! ┌ [`RootFindingError`] : common input errors
//! │   ├ non-finite seed or seed evaluation
//! │   ├ invalid bracket
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid stopping tolerance
//!     ├ invalid residual tolerance (`abs_fx`)
//!     └ invalid display precision


use thiserror::Error;


/// Root-finding input errors.
///
/// ┌ Non-finite seed or function evaluation at a seed
/// ├ Bracket bounds not finite or not ordered
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("invalid seed `{name}`: must be finite. got {got}")]
    NonFiniteSeed { name: &'static str, got: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid bounds: xi and xs must be finite with xi < xs. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.
///
/// ┌ Invalid stopping tolerance
/// ├ Invalid residual tolerance
/// └ Invalid display precision
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid `tolerance`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid display precision: {got} digits (allowed {min}..={max})")]
    InvalidPrecision { got: u32, min: u32, max: u32 },
}
