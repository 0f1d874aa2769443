//! Successive over-relaxation.
//!
//! `x_i^{(k+1)} = (1 - ω) x_i^{(k)} + ω x_i^{GS}`; `ω = 1` reduces to
//! Gauss-Seidel.

use tracing::instrument;

use super::config::{impl_iterative_cfg, impl_with_common, CommonCfg};
use super::gauss_seidel::relaxed_sweep;
use super::report::{IterativeMethod, IterativeSolveResult};
use super::runner::iterate;
use super::splitting::Splitting;
use crate::linear_systems::errors::IterativeError;
use crate::linear_systems::system::LinearSystem;

pub const DEFAULT_OMEGA: f64 = 1.0;


/// SOR configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `omega`  : relaxation factor, `0 < ω < 2` (default 1)
#[derive(Debug, Clone)]
pub struct SorCfg {
    common: CommonCfg,
    omega: f64,
}
impl SorCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), omega: DEFAULT_OMEGA } }

    pub fn set_omega(mut self, v: f64) -> Result<Self, IterativeError> {
        if !(v.is_finite() && v > 0.0 && v < 2.0) {
            return Err(IterativeError::InvalidOmega { got: v });
        }
        self.omega = v;
        Ok(self)
    }

    pub fn omega(&self) -> f64 { self.omega }
}
impl Default for SorCfg {
    fn default() -> Self { Self::new() }
}
impl_iterative_cfg!(SorCfg);
impl_with_common!(SorCfg);


/// Solves `A x = b` by SOR.
///
/// # Errors
/// - [`IterativeError::ZeroDiagonal`]       : some `a_ii == 0`
/// - [`IterativeError::InitialGuessLength`] : `x0` length differs from `n`
#[instrument(skip(system, cfg), fields(n = system.size(), omega = cfg.omega))]
pub fn sor(system: &LinearSystem, cfg: &SorCfg) -> Result<IterativeSolveResult, IterativeError> {
    let split = Splitting::new(system.a())?;
    let omega = cfg.omega;
    let tc = split.sor(system.b(), omega);

    iterate(system, &cfg.common, IterativeMethod::Sor, Some(omega), tc, |prev, next| {
        relaxed_sweep(system, omega, prev, next)
    })
}
