pub mod pivoting;
pub mod gauss;
pub mod validate;

pub use gauss::{solve, DirectSolveResult, GaussCfg};
pub use pivoting::PivotMode;
pub use validate::{validate, ValidationReport};
