//! Linear systems `A x = b`.
//!
//! ┌ [`system`]    : validated `(A, b)` pair
//! ├ [`direct`]    : gaussian elimination with none / partial / total pivoting
//! └ [`iterative`] : Jacobi, Gauss-Seidel and SOR with spectral-radius diagnostics

pub mod errors;
pub mod system;
pub mod direct;
pub mod iterative;

pub use errors::{DirectSolveError, IterativeError, LinearSystemError};
pub use system::LinearSystem;
