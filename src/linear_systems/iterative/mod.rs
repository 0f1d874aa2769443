pub mod config;
pub mod report;
pub mod spectral;
pub(crate) mod splitting;
pub(crate) mod runner;

pub mod jacobi;
pub mod gauss_seidel;
pub mod sor;

pub use gauss_seidel::{gauss_seidel, GaussSeidelCfg};
pub use jacobi::{jacobi, JacobiCfg};
pub use report::{IterativeMethod, IterativeSolveResult, SweepTermination};
pub use sor::{sor, SorCfg};
