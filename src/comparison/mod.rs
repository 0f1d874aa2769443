//! Runs several methods on one shared problem, timing and ranking them.
//!
//! ┌ [`roots`]     : root finders on `f(x) = 0`
//! └ [`iterative`] : Jacobi, Gauss-Seidel and SOR on `A x = b`

pub mod errors;
pub mod notes;
pub mod report;
pub mod roots;
pub mod iterative;

pub use errors::ComparisonError;
pub use iterative::{compare_iterative_solvers, IterativeComparisonCfg};
pub use notes::MethodNotes;
pub use report::{ComparisonReport, MethodEntry, MethodOutcome};
pub use roots::{compare_root_finders, RootComparisonCfg, RootFunctions};
