//! Jacobi iteration.
//!
//! `x_i^{(k+1)} = (b_i - Σ_{j≠i} a_ij x_j^{(k)}) / a_ii`, every component
//! computed from the previous iterate only.

use tracing::instrument;

use super::config::{impl_iterative_cfg, impl_with_common, CommonCfg};
use super::report::{IterativeMethod, IterativeSolveResult};
use super::runner::iterate;
use super::splitting::Splitting;
use crate::linear_systems::errors::IterativeError;
use crate::linear_systems::system::LinearSystem;


#[derive(Debug, Clone, Default)]
pub struct JacobiCfg {
    common: CommonCfg,
}
impl JacobiCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new() } }
}
impl_iterative_cfg!(JacobiCfg);
impl_with_common!(JacobiCfg);


/// Solves `A x = b` by Jacobi iteration.
///
/// # Errors
/// - [`IterativeError::ZeroDiagonal`]       : some `a_ii == 0`
/// - [`IterativeError::InitialGuessLength`] : `x0` length differs from `n`
#[instrument(skip(system, cfg), fields(n = system.size()))]
pub fn jacobi(system: &LinearSystem, cfg: &JacobiCfg) -> Result<IterativeSolveResult, IterativeError> {
    let split = Splitting::new(system.a())?;
    let tc = split.jacobi(system.b());

    let (a, b) = (system.a(), system.b());
    let n = system.size();
    iterate(system, &cfg.common, IterativeMethod::Jacobi, None, tc, |prev, next| {
        for i in 0..n {
            let mut acc = b[i];
            for j in 0..n {
                if j != i {
                    acc -= a[(i, j)] * prev[j];
                }
            }
            next[i] = acc / a[(i, i)];
        }
    })
}
