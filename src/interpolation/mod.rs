//! Polynomial and piecewise interpolation.
//!
//! Every method takes a `XxxCfg` built with `set_x`, `set_y` and optional
//! `set_x_eval`, and returns an [`InterpolationReport`] whose
//! [`Interpolant`] implements [`Interpolator`].

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub mod polynomial;

pub mod vandermonde;
pub mod newton;
pub mod lagrange;
pub mod spline;

pub use algorithms::Algorithm;
pub use errors::InterpolationError;
pub use polynomial::Polynomial;
pub use report::{Interpolant, InterpolationReport};
pub use spline::{PiecewisePolynomial, SplinePiece};
pub use traits::Interpolator;
