//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

use serde::{Deserialize, Serialize};

/// Interpolation algorithm variants.
/// - [`Algorithm::Vandermonde`]   monomial basis, linear system (or least squares)
/// - [`Algorithm::Newton`]        divided differences
/// - [`Algorithm::Lagrange`]      Lagrange basis
/// - [`Algorithm::LinearSpline`]  piecewise linear
/// - [`Algorithm::CubicSpline`]   natural cubic spline
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Vandermonde,
    Newton,
    Lagrange,
    LinearSpline,
    CubicSpline,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Vandermonde  => "vandermonde",
            Algorithm::Newton       => "newton",
            Algorithm::Lagrange     => "lagrange",
            Algorithm::LinearSpline => "linear_spline",
            Algorithm::CubicSpline  => "cubic_spline",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
