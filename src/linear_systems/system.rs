//! The validated pair `(A, b)` shared by the direct and iterative solvers.

use nalgebra::{DMatrix, DVector};

use super::errors::LinearSystemError;


/// Square system `A x = b`.
///
/// Invariant: `n = rows(A) = cols(A) = len(b)`, `n >= 1`, all entries finite.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl LinearSystem {
    /// Builds a system from row-major rows of `A` and the right-hand side `b`.
    ///
    /// # Errors
    /// - [`LinearSystemError::EmptyMatrix`]       : no rows
    /// - [`LinearSystemError::NotSquare`]         : a row whose length is not `n`
    /// - [`LinearSystemError::DimensionMismatch`] : `len(b) != n`
    /// - [`LinearSystemError::NonFinite`]         : NaN / infinite entry
    pub fn new(a: &[Vec<f64>], b: &[f64]) -> Result<Self, LinearSystemError> {
        let n = a.len();
        if n == 0 {
            return Err(LinearSystemError::EmptyMatrix);
        }
        if let Some((row, r)) = a.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(LinearSystemError::NotSquare { n, row, len: r.len() });
        }
        if b.len() != n {
            return Err(LinearSystemError::DimensionMismatch { n, b_len: b.len() });
        }
        for (i, r) in a.iter().enumerate() {
            if let Some(j) = r.iter().position(|v| !v.is_finite()) {
                return Err(LinearSystemError::NonFinite { what: "A", row: i, col: j });
            }
        }
        if let Some(i) = b.iter().position(|v| !v.is_finite()) {
            return Err(LinearSystemError::NonFinite { what: "b", row: i, col: 0 });
        }

        let a = DMatrix::from_fn(n, n, |i, j| a[i][j]);
        let b = DVector::from_column_slice(b);
        Ok(Self { a, b })
    }

    pub fn size(&self) -> usize { self.b.len() }
    pub fn a(&self) -> &DMatrix<f64> { &self.a }
    pub fn b(&self) -> &DVector<f64> { &self.b }

    /// `max_i |(A x - b)_i|`
    pub fn residual(&self, x: &[f64]) -> f64 {
        let x = DVector::from_column_slice(x);
        (&self.a * x - &self.b).amax()
    }
}


/// Row-major copy of a dense matrix, for reports.
pub(crate) fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| m.row(i).iter().copied().collect())
        .collect()
}
