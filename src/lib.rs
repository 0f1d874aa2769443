//! Classical numerical-analysis methods.
//!
//! ┌ [`error_metrics`]  : absolute / relative / percentage error and propagation
//! ├ [`root_finding`]   : bracketing and open methods for f(x) = 0
//! ├ [`interpolation`]  : polynomial and piecewise interpolants
//! ├ [`linear_systems`] : gaussian elimination and stationary iterative solvers
//! ├ [`comparison`]     : run several methods on one problem and rank them
//! ├ [`taylor`]         : truncated Taylor series for cos / sin
//! └ [`api`]            : request / response boundary (JSON)
//!
//! Every iterative method records an ordered trace of [`trace::IterationRecord`]s
//! and reports how it terminated instead of panicking on numeric trouble.

pub mod trace;

pub mod error_metrics;
pub mod root_finding;
pub mod interpolation;
pub mod linear_systems;
pub mod comparison;
pub mod taylor;
pub mod api;

pub use trace::{ErrorKind, IterationRecord};
