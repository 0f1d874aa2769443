//! Classical splitting `A = D - L - U` and the iteration matrices built on it.
//!
//! `D` is the diagonal of `A`, `L` the negated strictly-lower part and `U`
//! the negated strictly-upper part.
//!
//! ```text
//! Jacobi        T = D⁻¹ (L + U)                  c = D⁻¹ b
//! Gauss-Seidel  T = (D - L)⁻¹ U                  c = (D - L)⁻¹ b
//! SOR           T = (D - ωL)⁻¹ ((1 - ω) D + ωU)  c = ω (D - ωL)⁻¹ b
//! ```

use nalgebra::{DMatrix, DVector};

use crate::linear_systems::errors::IterativeError;


#[derive(Debug, Clone)]
pub(crate) struct Splitting {
    pub d: DMatrix<f64>,
    pub l: DMatrix<f64>,
    pub u: DMatrix<f64>,
}

impl Splitting {
    /// # Errors
    /// [`IterativeError::ZeroDiagonal`] on the first `a[i][i] == 0`.
    pub fn new(a: &DMatrix<f64>) -> Result<Self, IterativeError> {
        if let Some(row) = (0..a.nrows()).find(|&i| a[(i, i)] == 0.0) {
            return Err(IterativeError::ZeroDiagonal { row });
        }
        let d = DMatrix::from_diagonal(&a.diagonal());
        let l = -a.lower_triangle() + &d;
        let u = -a.upper_triangle() + &d;
        Ok(Self { d, l, u })
    }

    pub fn jacobi(&self, b: &DVector<f64>) -> (DMatrix<f64>, DVector<f64>) {
        let d_inv = self.d.map_diagonal(|v| 1.0 / v);
        let d_inv = DMatrix::from_diagonal(&d_inv);
        (&d_inv * (&self.l + &self.u), &d_inv * b)
    }

    pub fn gauss_seidel(&self, b: &DVector<f64>) -> (DMatrix<f64>, DVector<f64>) {
        self.sor(b, 1.0)
    }

    pub fn sor(&self, b: &DVector<f64>, omega: f64) -> (DMatrix<f64>, DVector<f64>) {
        let lower = &self.d - &self.l * omega;
        let rhs_t = &self.d * (1.0 - omega) + &self.u * omega;
        let rhs_c = DMatrix::from_column_slice(b.len(), 1, (b * omega).as_slice());

        // (D - ωL) is lower triangular with a non-zero diagonal
        let t = lower
            .solve_lower_triangular(&rhs_t)
            .unwrap_or_else(|| DMatrix::from_element(rhs_t.nrows(), rhs_t.ncols(), f64::NAN));
        let c = lower
            .solve_lower_triangular(&rhs_c)
            .map(|m| DVector::from_column_slice(m.as_slice()))
            .unwrap_or_else(|| DVector::from_element(b.len(), f64::NAN));
        (t, c)
    }
}
