//! Pivot selection for gaussian elimination.
//!
//! - [`PivotMode::None`]    : use `a[k][k]` as is
//! - [`PivotMode::Partial`] : largest `|a[i][k]|` for `i >= k` (row exchange)
//! - [`PivotMode::Total`]   : largest `|a[i][j]|` for `i, j >= k` (row and column exchange)

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotMode {
    #[serde(alias = "sin", alias = "simple", alias = "0")]
    None,
    #[default]
    #[serde(alias = "parcial", alias = "1")]
    Partial,
    #[serde(alias = "2")]
    Total,
}

impl PivotMode {
    pub const fn name(self) -> &'static str {
        match self {
            PivotMode::None    => "none",
            PivotMode::Partial => "partial",
            PivotMode::Total   => "total",
        }
    }
}

impl std::fmt::Display for PivotMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Row in `k..n` holding the largest `|a[i][k]|`; ties keep the topmost.
pub(crate) fn partial_pivot(a: &DMatrix<f64>, k: usize) -> usize {
    let mut best = k;
    for i in k + 1..a.nrows() {
        if a[(i, k)].abs() > a[(best, k)].abs() {
            best = i;
        }
    }
    best
}

/// `(row, col)` in the trailing submatrix holding the largest `|a[i][j]|`.
pub(crate) fn total_pivot(a: &DMatrix<f64>, k: usize) -> (usize, usize) {
    let n = a.nrows();
    let mut best = (k, k);
    for i in k..n {
        for j in k..n {
            if a[(i, j)].abs() > a[best].abs() {
                best = (i, j);
            }
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_picks_largest_in_column() {
        let a = DMatrix::from_row_slice(3, 3, &[0.0, 2.0, 3.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0]);
        assert_eq!(partial_pivot(&a, 0), 2);
        assert_eq!(partial_pivot(&a, 1), 2);
    }

    #[test]
    fn total_searches_trailing_block() {
        let a = DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, -9.0, 0.0, 4.0, 2.0]);
        assert_eq!(total_pivot(&a, 0), (1, 2));
        assert_eq!(total_pivot(&a, 1), (1, 2));
    }
}
