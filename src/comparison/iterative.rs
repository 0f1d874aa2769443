//! Runs Jacobi, Gauss-Seidel and SOR on one linear system.

use std::collections::BTreeMap;

use tracing::instrument;

use super::errors::ComparisonError;
use super::notes::{iterative_notes, MethodNotes};
use super::report::{ComparisonReport, MethodEntry};
use crate::linear_systems::iterative::config::{impl_iterative_cfg, CommonCfg};
use crate::linear_systems::iterative::sor::DEFAULT_OMEGA;
use crate::linear_systems::iterative::{
    gauss_seidel, jacobi, sor, GaussSeidelCfg, IterativeMethod, IterativeSolveResult, JacobiCfg,
    SorCfg,
};
use crate::linear_systems::{IterativeError, LinearSystem};


/// Shared stopping parameters plus the SOR relaxation factor.
#[derive(Debug, Clone)]
pub struct IterativeComparisonCfg {
    common : CommonCfg,
    omega  : f64,
}
impl IterativeComparisonCfg {
    #[must_use]
    pub fn new() -> Self { Self { common: CommonCfg::new(), omega: DEFAULT_OMEGA } }

    /// Relaxation factor for the SOR run, `0 < ω < 2`.
    pub fn set_omega(mut self, v: f64) -> Result<Self, IterativeError> {
        if !(v.is_finite() && v > 0.0 && v < 2.0) {
            return Err(IterativeError::InvalidOmega { got: v });
        }
        self.omega = v;
        Ok(self)
    }

    pub fn omega(&self) -> f64 { self.omega }
}
impl Default for IterativeComparisonCfg {
    fn default() -> Self { Self::new() }
}
impl_iterative_cfg!(IterativeComparisonCfg);


fn spectral_note(results: &[MethodEntry<IterativeSolveResult>]) -> Option<String> {
    let radii: Vec<(&str, f64)> = results
        .iter()
        .filter_map(|e| e.result.as_ref().map(|r| (e.method.as_str(), r.spectral_radius)))
        .collect();
    let (best, rho) = radii.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1))?;

    let listed = radii
        .iter()
        .map(|(m, r)| format!("{m}: {r:.6}"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(if rho < 1.0 {
        format!(
            "Spectral radii ({listed}). {best} has the smallest radius, so its error \
             contracts fastest; every method with radius below 1 converges from any x0."
        )
    } else {
        format!(
            "Spectral radii ({listed}). No iteration matrix has radius below 1, so \
             convergence is not guaranteed for any method."
        )
    })
}


/// Runs the three stationary methods on `system` and ranks them.
///
/// Each method gets its own entry even when it rejects the system, e.g. a
/// zero diagonal makes all three fail.
#[instrument(skip(system, cfg), fields(n = system.size(), omega = cfg.omega))]
pub fn compare_iterative_solvers(
    system: &LinearSystem,
    cfg: &IterativeComparisonCfg,
) -> Result<ComparisonReport<IterativeSolveResult>, ComparisonError> {
    let common = cfg.common().clone();
    let sor_cfg = SorCfg::new().with_common(common.clone()).set_omega(cfg.omega)?;

    let results = vec![
        MethodEntry::timed(IterativeMethod::Jacobi.display_name(), || {
            jacobi(system, &JacobiCfg::new().with_common(common.clone()))
        }),
        MethodEntry::timed(IterativeMethod::GaussSeidel.display_name(), || {
            gauss_seidel(system, &GaussSeidelCfg::new().with_common(common.clone()))
        }),
        MethodEntry::timed(IterativeMethod::Sor.display_name(), || sor(system, &sor_cfg)),
    ];

    let notes: BTreeMap<String, MethodNotes> = IterativeMethod::ALL
        .iter()
        .map(|&m| (m.display_name().to_string(), iterative_notes(m)))
        .collect();
    let note = spectral_note(&results);

    Ok(ComparisonReport::rank(results, notes, note))
}
