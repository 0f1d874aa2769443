// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub mod precision;
pub(crate) mod signs;
pub mod tolerances;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod incremental;
pub mod fixed_point;
pub mod newton;
pub mod secant;
pub mod multiple_roots;

pub use algorithms::Algorithm;
pub use config::StopMode;
pub use precision::Precision;
pub use report::{Degeneracy, RootResult, Termination};
