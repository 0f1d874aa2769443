//! Sweep loop shared by the three stationary methods.

use std::time::Instant;

use nalgebra::{DMatrix, DVector};
use tracing::{debug, info, warn};

use super::config::CommonCfg;
use super::report::{IterativeMethod, IterativeSolveResult, SweepTermination};
use super::spectral::spectral_radius;
use crate::linear_systems::errors::IterativeError;
use crate::linear_systems::system::{to_rows, LinearSystem};
use crate::trace::IterationRecord;


/// Initial guess from the config, or zeros.
pub(crate) fn initial_guess(n: usize, cfg: &CommonCfg) -> Result<Vec<f64>, IterativeError> {
    match cfg.x0() {
        None                       => Ok(vec![0.0; n]),
        Some(x0) if x0.len() == n  => Ok(x0.to_vec()),
        Some(x0)                   => Err(IterativeError::InitialGuessLength { expected: n, got: x0.len() }),
    }
}


/// Runs `sweep(previous, next)` until the step error drops below tolerance,
/// the sweep cap is hit, or an iterate stops being finite.
pub(crate) fn iterate<S>(
    system: &LinearSystem,
    cfg: &CommonCfg,
    method: IterativeMethod,
    omega: Option<f64>,
    (t, c): (DMatrix<f64>, DVector<f64>),
    mut sweep: S,
) -> Result<IterativeSolveResult, IterativeError>
where S: FnMut(&[f64], &mut [f64]) {

    let started = Instant::now();
    let n = system.size();
    let mut x = initial_guess(n, cfg)?;
    let mut next = vec![0.0; n];

    let rho = spectral_radius(&t);
    let theoretically_convergent = rho < 1.0;
    debug!(method = method.method_name(), rho, "iteration matrix");

    let tolerance = cfg.tolerance();
    let mut iterations = Vec::new();
    let mut final_error = f64::INFINITY;
    let mut termination = SweepTermination::IterationLimit;
    let mut count = 0;

    for k in 1..=cfg.max_iter() {
        sweep(&x, &mut next);
        if next.iter().any(|v| !v.is_finite()) {
            termination = SweepTermination::Diverged { step: k };
            break;
        }

        let error = cfg.error_kind().between_vectors(&next, &x);
        let mut row = IterationRecord::new(k);
        for (i, v) in next.iter().enumerate() {
            row = row.with(format!("x{}", i + 1), *v);
        }
        iterations.push(row.with_error(Some(error)));
        debug!(method = method.method_name(), sweep = k, error, "sweep");

        std::mem::swap(&mut x, &mut next);
        final_error = error;
        count = k;

        if error < tolerance {
            termination = SweepTermination::ToleranceReached;
            break;
        }
    }

    let success = termination == SweepTermination::ToleranceReached;
    let guarantee = if theoretically_convergent {
        format!("ρ(T) = {rho:.6} < 1, convergence is guaranteed")
    } else if rho.is_nan() {
        "ρ(T) could not be estimated, convergence is not guaranteed".to_string()
    } else {
        format!("ρ(T) = {rho:.6} >= 1, convergence is not guaranteed")
    };
    let message = match termination {
        SweepTermination::ToleranceReached => format!(
            "{} converged in {count} iterations ({} error {final_error:.3e} < {tolerance:e}); {guarantee}",
            method.display_name(), cfg.error_kind()
        ),
        SweepTermination::IterationLimit => format!(
            "{} did not converge within {count} iterations (last error {final_error:.3e}); {guarantee}",
            method.display_name()
        ),
        SweepTermination::Diverged { step } => format!(
            "{} diverged at iteration {step}: a non-finite value appeared; {guarantee}",
            method.display_name()
        ),
    };

    if success {
        info!(method = method.method_name(), iterations = count, rho, "converged");
    } else {
        warn!(method = method.method_name(), iterations = count, rho, %message, "stopped without convergence");
    }

    Ok(IterativeSolveResult {
        method,
        success,
        solution: x,
        iteration_count: count,
        final_error,
        spectral_radius: rho,
        theoretically_convergent,
        iterations,
        iteration_matrix: to_rows(&t),
        iteration_vector: c.iter().copied().collect(),
        omega,
        error_kind: cfg.error_kind(),
        termination,
        message,
        elapsed: started.elapsed(),
    })
}
