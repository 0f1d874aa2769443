//! Gauss-Seidel iteration.
//!
//! Same update as Jacobi but each component immediately uses the components
//! already updated in the current sweep.

use tracing::instrument;

use super::config::{impl_iterative_cfg, impl_with_common, CommonCfg};
use super::report::{IterativeMethod, IterativeSolveResult};
use super::runner::iterate;
use super::splitting::Splitting;
use crate::linear_systems::errors::IterativeError;
use crate::linear_systems::system::LinearSystem;


#[derive(Debug, Clone, Default)]
pub struct GaussSeidelCfg {
    common: CommonCfg,
}
impl GaussSeidelCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new() } }
}
impl_iterative_cfg!(GaussSeidelCfg);
impl_with_common!(GaussSeidelCfg);


/// One relaxed Gauss-Seidel sweep; `omega = 1` is plain Gauss-Seidel.
pub(crate) fn relaxed_sweep(system: &LinearSystem, omega: f64, prev: &[f64], next: &mut [f64]) {
    let (a, b) = (system.a(), system.b());
    let n = system.size();
    next.copy_from_slice(prev);
    for i in 0..n {
        let mut acc = b[i];
        for j in 0..n {
            if j != i {
                acc -= a[(i, j)] * next[j];
            }
        }
        let gs = acc / a[(i, i)];
        next[i] = (1.0 - omega) * prev[i] + omega * gs;
    }
}


/// Solves `A x = b` by Gauss-Seidel iteration.
///
/// # Errors
/// - [`IterativeError::ZeroDiagonal`]       : some `a_ii == 0`
/// - [`IterativeError::InitialGuessLength`] : `x0` length differs from `n`
#[instrument(skip(system, cfg), fields(n = system.size()))]
pub fn gauss_seidel(
    system: &LinearSystem,
    cfg: &GaussSeidelCfg,
) -> Result<IterativeSolveResult, IterativeError> {
    let split = Splitting::new(system.a())?;
    let tc = split.gauss_seidel(system.b());

    iterate(system, &cfg.common, IterativeMethod::GaussSeidel, None, tc, |prev, next| {
        relaxed_sweep(system, 1.0, prev, next)
    })
}
