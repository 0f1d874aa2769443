//! Pre-solve diagnostics for `A x = b`.
//!
//! Unlike [`solve`](super::gauss::solve) this never fails: every check is
//! reported as a flag, and the first failing one is named in `message`.

use serde::Serialize;
use tracing::instrument;

use super::gauss::{determinant, solve, GaussCfg};
use super::pivoting::PivotMode;
use crate::linear_systems::system::LinearSystem;

/// `|det(A)|` below this is reported as singular.
pub const DETERMINANT_EPS: f64 = 1e-12;

/// `|det(A)|` above this (and no zero pivot along the way) needs no pivoting.
pub const WELL_CONDITIONED_DET: f64 = 0.1;


/// Validity report.
///
/// [`ValidationReport`]
/// - `valid`            : every check passed and the requested mode can solve it
/// - `size`             : number of rows of `A`
/// - `square`           : every row has `size` entries
/// - `dimensions_match` : `len(b) == size`
/// - `finite`           : no NaN / infinite entry
/// - `determinant`      : `det(A)` when the shape checks pass
/// - `nonsingular`      : `|det(A)| > DETERMINANT_EPS`
/// - `pivot_ok`         : elimination with `pivot` succeeds
/// - `recommended`      : suggested [`PivotMode`]
/// - `recommendation`   : explanation of `recommended`
/// - `message`          : summary, naming the first failing check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid            : bool,
    pub size             : usize,
    pub square           : bool,
    pub dimensions_match : bool,
    pub finite           : bool,
    pub determinant      : Option<f64>,
    pub nonsingular      : bool,
    pub pivot            : PivotMode,
    pub pivot_ok         : bool,
    pub recommended      : Option<PivotMode>,
    pub recommendation   : String,
    pub message          : String,
}


/// Checks shape, finiteness and singularity of `(A, b)` and whether `pivot`
/// can solve it, and recommends a pivoting strategy.
#[instrument(skip(a, b))]
pub fn validate(a: &[Vec<f64>], b: &[f64], pivot: PivotMode) -> ValidationReport {
    let size = a.len();
    let square = size > 0 && a.iter().all(|r| r.len() == size);
    let dimensions_match = b.len() == size;
    let finite = a.iter().flatten().chain(b).all(|v| v.is_finite());

    let mut report = ValidationReport {
        valid: false,
        size,
        square,
        dimensions_match,
        finite,
        determinant: None,
        nonsingular: false,
        pivot,
        pivot_ok: false,
        recommended: None,
        recommendation: String::new(),
        message: String::new(),
    };

    let system = match LinearSystem::new(a, b) {
        Ok(s)  => s,
        Err(e) => {
            report.message = format!("invalid system: {e}");
            report.recommendation = "fix the system dimensions before solving".to_string();
            return report;
        }
    };

    let det = determinant(&system);
    report.determinant = Some(det);
    report.nonsingular = det.abs() > DETERMINANT_EPS;
    report.pivot_ok = solve(&system, GaussCfg::new().set_pivot(pivot)).is_ok();
    let naive_ok = solve(&system, GaussCfg::new().set_pivot(PivotMode::None)).is_ok();

    let (recommended, recommendation) = if !report.nonsingular {
        (None, "the matrix is singular; no pivoting strategy yields a unique solution".to_string())
    } else if !naive_ok {
        (
            Some(PivotMode::Partial),
            "a zero pivot appears without row exchanges; use partial pivoting".to_string(),
        )
    } else if det.abs() > WELL_CONDITIONED_DET {
        (
            Some(PivotMode::None),
            format!("|det(A)| = {:.6} > {WELL_CONDITIONED_DET}; elimination without pivoting is adequate", det.abs()),
        )
    } else {
        (
            Some(PivotMode::Total),
            format!("|det(A)| = {:.3e} is small; total pivoting reduces rounding error", det.abs()),
        )
    };
    report.recommended = recommended;
    report.recommendation = recommendation;

    report.valid = report.nonsingular && report.pivot_ok;
    report.message = if !report.nonsingular {
        format!("matrix is singular: det(A) = {det:e}")
    } else if !report.pivot_ok {
        format!("elimination with {pivot} pivoting fails on this matrix")
    } else {
        format!("system is valid: {size}x{size}, det(A) = {det:.6}")
    };
    report
}
