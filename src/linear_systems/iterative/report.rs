//! Defines the [`IterativeSolveResult`] struct returned by Jacobi,
//! Gauss-Seidel and SOR.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::trace::{serialize_secs, ErrorKind, IterationRecord};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IterativeMethod {
    Jacobi,
    GaussSeidel,
    Sor,
}

impl IterativeMethod {
    pub const ALL: [IterativeMethod; 3] =
        [IterativeMethod::Jacobi, IterativeMethod::GaussSeidel, IterativeMethod::Sor];

    pub const fn method_name(self) -> &'static str {
        match self {
            IterativeMethod::Jacobi      => "jacobi",
            IterativeMethod::GaussSeidel => "gauss_seidel",
            IterativeMethod::Sor         => "sor",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            IterativeMethod::Jacobi      => "Jacobi",
            IterativeMethod::GaussSeidel => "Gauss-Seidel",
            IterativeMethod::Sor         => "SOR",
        }
    }
}

impl std::fmt::Display for IterativeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}


/// Reasons an iterative solve may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SweepTermination {
    ToleranceReached,
    IterationLimit,
    Diverged { step: usize },
}


/// Final report of an iterative solve.
///
/// [`IterativeSolveResult`]
/// - `method`                   : which splitting was iterated
/// - `success`                  : tolerance met with a finite iterate
/// - `solution`                 : last finite iterate
/// - `iteration_count`          : sweeps performed
/// - `final_error`              : last `||x_{k+1} - x_k||`
/// - `spectral_radius`          : `ρ(T)`, computed once per call
/// - `theoretically_convergent` : `ρ(T) < 1`
/// - `iterations`               : one row per sweep with `x1..xn` and the error
/// - `iteration_matrix`         : `T`, row-major
/// - `iteration_vector`         : `c`
/// - `omega`                    : relaxation factor (SOR only)
/// - `error_kind`               : absolute or relative norm
/// - `termination`              : why the sweeps stopped
/// - `message`                  : human-readable outcome
/// - `elapsed`                  : wall-clock duration, serialized in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterativeSolveResult {
    pub method                   : IterativeMethod,
    pub success                  : bool,
    pub solution                 : Vec<f64>,
    pub iteration_count          : usize,
    pub final_error              : f64,
    pub spectral_radius          : f64,
    pub theoretically_convergent : bool,
    pub iterations               : Vec<IterationRecord>,
    pub iteration_matrix         : Vec<Vec<f64>>,
    pub iteration_vector         : Vec<f64>,
    pub omega                    : Option<f64>,
    pub error_kind               : ErrorKind,
    pub termination              : SweepTermination,
    pub message                  : String,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed                  : Duration,
}
