//! Static reference notes on each method, attached to comparison reports.

use serde::Serialize;

use crate::linear_systems::iterative::IterativeMethod;
use crate::root_finding::Algorithm;


/// Qualitative profile of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodNotes {
    pub advantages       : &'static [&'static str],
    pub disadvantages    : &'static [&'static str],
    pub convergence_type : &'static str,
    pub best_use_case    : &'static str,
}


pub const fn root_notes(algorithm: Algorithm) -> MethodNotes {
    match algorithm {
        Algorithm::Bisection => MethodNotes {
            advantages       : &["guaranteed convergence", "robust", "simple"],
            disadvantages    : &["slow", "needs an interval with a sign change"],
            convergence_type : "linear",
            best_use_case    : "an interval with a sign change is known",
        },
        Algorithm::RegulaFalsi => MethodNotes {
            advantages       : &["usually faster than bisection", "guaranteed convergence"],
            disadvantages    : &["one end point can stagnate", "needs an interval"],
            convergence_type : "superlinear",
            best_use_case    : "like bisection, when fewer evaluations matter",
        },
        Algorithm::IncrementalSearch => MethodNotes {
            advantages       : &["no derivative", "locates an interval for bracketing methods"],
            disadvantages    : &["only brackets the root", "misses roots closer than the step"],
            convergence_type : "none (scan)",
            best_use_case    : "finding a starting interval",
        },
        Algorithm::FixedPoint => MethodNotes {
            advantages       : &["simple", "versatile"],
            disadvantages    : &["needs a suitable g(x)", "convergence not guaranteed"],
            convergence_type : "linear (when |g'(x)| < 1)",
            best_use_case    : "the equation rearranges easily into x = g(x)",
        },
        Algorithm::Newton => MethodNotes {
            advantages       : &["quadratic convergence", "very fast near the root"],
            disadvantages    : &["needs the derivative", "can diverge"],
            convergence_type : "quadratic",
            best_use_case    : "a good starting point and the derivative are available",
        },
        Algorithm::Secant => MethodNotes {
            advantages       : &["no derivative", "fast", "superlinear convergence"],
            disadvantages    : &["needs two starting points", "less stable than Newton"],
            convergence_type : "superlinear (order ~1.618)",
            best_use_case    : "an alternative to Newton when f' is unavailable",
        },
        Algorithm::MultipleRoots => MethodNotes {
            advantages       : &["handles multiple roots", "quadratic convergence"],
            disadvantages    : &["needs f' and f''", "more work per step"],
            convergence_type : "quadratic, also at multiple roots",
            best_use_case    : "a root of multiplicity > 1 is suspected",
        },
    }
}


pub const fn iterative_notes(method: IterativeMethod) -> MethodNotes {
    match method {
        IterativeMethod::Jacobi => MethodNotes {
            advantages       : &["simple", "every component updates independently"],
            disadvantages    : &["usually the slowest of the three"],
            convergence_type : "linear, rate ρ(T_J)",
            best_use_case    : "strictly diagonally dominant systems; parallel sweeps",
        },
        IterativeMethod::GaussSeidel => MethodNotes {
            advantages       : &["reuses updated components", "typically about twice as fast as Jacobi"],
            disadvantages    : &["sequential sweep"],
            convergence_type : "linear, rate ρ(T_GS)",
            best_use_case    : "diagonally dominant or symmetric positive definite systems",
        },
        IterativeMethod::Sor => MethodNotes {
            advantages       : &["a good ω accelerates Gauss-Seidel considerably"],
            disadvantages    : &["ω must be chosen", "a poor ω can slow or break convergence"],
            convergence_type : "linear, rate ρ(T_ω)",
            best_use_case    : "large systems where a good relaxation factor is known",
        },
    }
}
