//! Taylor series approximations of `cos` and `sin`.

pub mod errors;
pub mod series;

pub use errors::TaylorError;
pub use series::{cos, sin, Series, TaylorCfg, TaylorReport};
