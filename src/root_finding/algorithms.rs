//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! grouped by [`Family`].

use serde::{Deserialize, Serialize};


/// Root-finding algorithm variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bisection,
    RegulaFalsi,
    IncrementalSearch,
    FixedPoint,
    Newton,
    Secant,
    MultipleRoots,
}

/// - [`Family::Bracket`] : keeps a sign-change interval `[xi, xs]`
/// - [`Family::Open`]    : iterates from one or two seeds
/// - [`Family::Scan`]    : steps a fixed increment looking for a sign change
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Family {
    Bracket,
    Open,
    Scan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bisection,
        Algorithm::RegulaFalsi,
        Algorithm::IncrementalSearch,
        Algorithm::FixedPoint,
        Algorithm::Newton,
        Algorithm::Secant,
        Algorithm::MultipleRoots,
    ];

    pub const fn family(self) -> Family {
        match self {
            Algorithm::Bisection | Algorithm::RegulaFalsi => Family::Bracket,
            Algorithm::IncrementalSearch                  => Family::Scan,
            Algorithm::FixedPoint
            | Algorithm::Newton
            | Algorithm::Secant
            | Algorithm::MultipleRoots                    => Family::Open,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection         => "bisection",
            Algorithm::RegulaFalsi       => "regula_falsi",
            Algorithm::IncrementalSearch => "incremental_search",
            Algorithm::FixedPoint        => "fixed_point",
            Algorithm::Newton            => "newton",
            Algorithm::Secant            => "secant",
            Algorithm::MultipleRoots     => "multiple_roots",
        }
    }

    /// Human-readable name used in messages and comparison reports.
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bisection         => "Bisection",
            Algorithm::RegulaFalsi       => "Regula Falsi",
            Algorithm::IncrementalSearch => "Incremental Search",
            Algorithm::FixedPoint        => "Fixed Point",
            Algorithm::Newton            => "Newton-Raphson",
            Algorithm::Secant            => "Secant",
            Algorithm::MultipleRoots     => "Multiple Roots",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
