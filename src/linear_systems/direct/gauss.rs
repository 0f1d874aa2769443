//! Gaussian elimination with configurable pivoting.
//!
//! Forward elimination to upper-triangular form on the augmented matrix
//! `[A | b]`, then back substitution. Column exchanges under
//! [`PivotMode::Total`] permute the unknowns; `variable_order[i]` is the
//! original index of the unknown that ended up in position `i`, and the
//! returned solution is already mapped back to the original order.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use nalgebra::DMatrix;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::pivoting::{partial_pivot, total_pivot, PivotMode};
use crate::linear_systems::errors::DirectSolveError;
use crate::linear_systems::system::{to_rows, LinearSystem};
use crate::trace::serialize_secs;


/// Gaussian elimination configuration.
///
/// - `pivot`        : [`PivotMode`], partial by default
/// - `show_process` : record a textual trace of every stage
#[derive(Debug, Copy, Clone, Default)]
pub struct GaussCfg {
    pivot: PivotMode,
    show_process: bool,
}
impl GaussCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn set_pivot(mut self, v: PivotMode) -> Self { self.pivot = v; self }

    #[must_use]
    pub fn set_show_process(mut self, v: bool) -> Self { self.show_process = v; self }

    pub fn pivot(&self) -> PivotMode { self.pivot }
    pub fn show_process(&self) -> bool { self.show_process }
}


/// Result of a direct solve.
///
/// [`DirectSolveResult`]
/// - `pivot`          : pivoting strategy used
/// - `solution`       : `x` in the original variable order
/// - `variable_order` : column permutation (identity unless total pivoting)
/// - `determinant`    : `det(A)` from the pivots and the exchange parity
/// - `row_swaps`      : number of row exchanges
/// - `column_swaps`   : number of column exchanges
/// - `residual`       : `max |A x - b|`
/// - `upper`          : final upper-triangular augmented matrix `[U | b']`
/// - `message`        : human-readable outcome
/// - `process`        : per-stage textual trace, when requested
/// - `elapsed`        : wall-clock duration, serialized in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectSolveResult {
    pub pivot          : PivotMode,
    pub solution       : Vec<f64>,
    pub variable_order : Vec<usize>,
    pub determinant    : f64,
    pub row_swaps      : usize,
    pub column_swaps   : usize,
    pub residual       : f64,
    pub upper          : Vec<Vec<f64>>,
    pub message        : String,
    pub process        : Option<Vec<String>>,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed        : Duration,
}


/// Pivots below `n * eps * max|a_ij|` are treated as zero.
pub(crate) fn pivot_threshold(a: &DMatrix<f64>) -> f64 {
    a.nrows() as f64 * f64::EPSILON * a.amax()
}


/// Forward-eliminated augmented matrix plus the bookkeeping needed to undo
/// column exchanges.
struct Elimination {
    aug          : DMatrix<f64>,
    mark         : Vec<usize>,
    row_swaps    : usize,
    column_swaps : usize,
}

impl Elimination {
    fn determinant(&self) -> f64 {
        let n = self.mark.len();
        let sign = if (self.row_swaps + self.column_swaps) % 2 == 0 { 1.0 } else { -1.0 };
        sign * (0..n).map(|i| self.aug[(i, i)]).product::<f64>()
    }
}


fn snapshot(aug: &DMatrix<f64>) -> String {
    let n = aug.nrows();
    let mut s = String::new();
    for i in 0..n {
        for j in 0..n {
            let _ = write!(s, "{:>12.6}", aug[(i, j)]);
        }
        let _ = writeln!(s, " | {:>12.6}", aug[(i, n)]);
    }
    s
}


fn eliminate(
    system: &LinearSystem,
    mode: PivotMode,
    mut process: Option<&mut Vec<String>>,
) -> Result<Elimination, DirectSolveError> {
    let n = system.size();
    let tiny = pivot_threshold(system.a());

    let mut aug = system.a().clone().insert_column(n, 0.0);
    aug.set_column(n, system.b());

    let mut mark: Vec<usize> = (0..n).collect();
    let mut row_swaps = 0;
    let mut column_swaps = 0;

    if let Some(p) = process.as_deref_mut() {
        p.push(format!("stage 0: augmented matrix\n{}", snapshot(&aug)));
    }

    for k in 0..n {
        let mut note = String::new();
        match mode {
            PivotMode::None => {}
            PivotMode::Partial => {
                let r = partial_pivot(&aug, k);
                if r != k {
                    aug.swap_rows(k, r);
                    row_swaps += 1;
                    let _ = write!(note, "swap rows {k} and {r}; ");
                }
            }
            PivotMode::Total => {
                let (r, c) = total_pivot(&aug, k);
                if r != k {
                    aug.swap_rows(k, r);
                    row_swaps += 1;
                    let _ = write!(note, "swap rows {k} and {r}; ");
                }
                if c != k {
                    aug.swap_columns(k, c);
                    mark.swap(k, c);
                    column_swaps += 1;
                    let _ = write!(note, "swap columns {k} and {c}; ");
                }
            }
        }

        let pivot = aug[(k, k)];
        if pivot.abs() <= tiny {
            return Err(match mode {
                PivotMode::None => DirectSolveError::ZeroPivot { stage: k + 1, pivot },
                _               => DirectSolveError::Singular { stage: k + 1 },
            });
        }

        for i in k + 1..n {
            let m = aug[(i, k)] / pivot;
            if m == 0.0 {
                continue;
            }
            for j in k..=n {
                aug[(i, j)] -= m * aug[(k, j)];
            }
            let _ = write!(note, "m{}{} = {m:.6}; ", i + 1, k + 1);
        }

        debug!(stage = k + 1, pivot, "elimination stage");
        if let Some(p) = process.as_deref_mut() {
            if k + 1 < n {
                p.push(format!("stage {}: pivot {pivot:.6}; {note}\n{}", k + 1, snapshot(&aug)));
            }
        }
    }

    Ok(Elimination { aug, mark, row_swaps, column_swaps })
}


fn back_substitution(aug: &DMatrix<f64>) -> Result<Vec<f64>, DirectSolveError> {
    let n = aug.nrows();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut acc = aug[(i, n)];
        for j in i + 1..n {
            acc -= aug[(i, j)] * x[j];
        }
        x[i] = acc / aug[(i, i)];
        if !x[i].is_finite() {
            return Err(DirectSolveError::NonFiniteSolution { row: i });
        }
    }
    Ok(x)
}


/// Solves `A x = b` by gaussian elimination.
///
/// # Errors
/// - [`DirectSolveError::ZeroPivot`]         : [`PivotMode::None`] met a (near) zero pivot
/// - [`DirectSolveError::Singular`]          : no usable pivot under partial / total pivoting
/// - [`DirectSolveError::NonFiniteSolution`] : overflow during back substitution
#[instrument(skip(system), fields(n = system.size()))]
pub fn solve(system: &LinearSystem, cfg: GaussCfg) -> Result<DirectSolveResult, DirectSolveError> {
    let started = Instant::now();
    let mut process = cfg.show_process.then(Vec::new);

    let elim = match eliminate(system, cfg.pivot, process.as_mut()) {
        Ok(e)  => e,
        Err(e) => {
            warn!(error = %e, "gaussian elimination failed");
            return Err(e);
        }
    };
    let x = back_substitution(&elim.aug)?;

    let n = x.len();
    let mut solution = vec![0.0; n];
    for (i, &xi) in x.iter().enumerate() {
        solution[elim.mark[i]] = xi;
    }

    if let Some(p) = process.as_mut() {
        p.push(format!("upper triangular system\n{}", snapshot(&elim.aug)));
        let mut s = String::from("back substitution:");
        for (i, v) in x.iter().enumerate() {
            let _ = write!(s, " x{} = {v:.6}", elim.mark[i] + 1);
        }
        p.push(s);
    }

    let residual = system.residual(&solution);
    let message = match cfg.pivot {
        PivotMode::None => "system solved by gaussian elimination".to_string(),
        mode => format!(
            "system solved by gaussian elimination with {mode} pivoting ({} row, {} column exchanges)",
            elim.row_swaps, elim.column_swaps
        ),
    };

    Ok(DirectSolveResult {
        pivot          : cfg.pivot,
        solution,
        variable_order : elim.mark.clone(),
        determinant    : elim.determinant(),
        row_swaps      : elim.row_swaps,
        column_swaps   : elim.column_swaps,
        residual,
        upper          : to_rows(&elim.aug),
        message,
        process,
        elapsed        : started.elapsed(),
    })
}


/// `det(A)` by elimination with partial pivoting; 0 when a pivot vanishes.
pub fn determinant(system: &LinearSystem) -> f64 {
    match eliminate(system, PivotMode::Partial, None) {
        Ok(e)  => e.determinant(),
        Err(_) => 0.0,
    }
}
