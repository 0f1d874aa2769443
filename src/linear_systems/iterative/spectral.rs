//! Spectral radius of an iteration matrix.
//!
//! Computed from the real Schur form (all eigenvalues, complex pairs
//! included). If the QR iteration does not settle or yields a non-finite
//! eigenvalue, falls back to power iteration on `T`, which estimates the
//! dominant eigenvalue magnitude. `NaN` when no finite estimate exists.

use nalgebra::{DMatrix, DVector};
use tracing::warn;

const SCHUR_MAX_ITER : usize = 10_000;
const POWER_MAX_ITER : usize = 2_000;
const POWER_TOL      : f64   = 1e-12;


/// `ρ(T) = max |λ_i(T)|`
pub fn spectral_radius(t: &DMatrix<f64>) -> f64 {
    if t.nrows() == 0 {
        return 0.0;
    }
    if !t.iter().all(|v| v.is_finite()) {
        return f64::NAN;
    }
    let moduli = match t.clone().try_schur(f64::EPSILON, SCHUR_MAX_ITER) {
        Some(schur) => schur.complex_eigenvalues().iter().map(|z| z.norm()).collect::<Vec<_>>(),
        None => {
            warn!(n = t.nrows(), "schur decomposition did not converge; using power iteration");
            return finite_or_nan(power_iteration(t));
        }
    };
    // huge entries overflow the Schur form; f64::max would drop the NaN
    if moduli.iter().any(|m| !m.is_finite()) {
        warn!(n = t.nrows(), "non-finite eigenvalue from schur form; using power iteration");
        return finite_or_nan(power_iteration(t));
    }
    moduli.into_iter().fold(0.0, f64::max)
}


/// Euclidean norm scaled by the largest entry so `1e200`-sized entries do
/// not overflow when squared.
fn scaled_norm(w: &DVector<f64>) -> f64 {
    let scale = w.amax();
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * (w / scale).norm()
}


fn finite_or_nan(v: f64) -> f64 {
    if v.is_finite() { v } else { f64::NAN }
}


fn power_iteration(t: &DMatrix<f64>) -> f64 {
    let n = t.nrows();
    let mut v = DVector::from_element(n, 1.0 / (n as f64).sqrt());
    let mut estimate = 0.0;

    for _ in 0..POWER_MAX_ITER {
        let w = t * &v;
        let norm = scaled_norm(&w);
        if norm == 0.0 {
            return 0.0;
        }
        let converged = (norm - estimate).abs() <= POWER_TOL * norm.max(1.0);
        estimate = norm;
        v = w / norm;
        if converged {
            break;
        }
    }
    estimate
}
