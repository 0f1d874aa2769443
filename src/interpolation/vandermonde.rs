//! Vandermonde (monomial-basis) interpolation.
//!
//! For degree `d = n - 1` the square system `V c = y`, with rows
//! `[x_i^d, ..., x_i, 1]`, is solved exactly. For `d < n - 1` the
//! least-squares fit over all points is computed from the normal equations
//! `Vᵀ V c = Vᵀ y`. Both go through gaussian elimination with partial
//! pivoting, and `c` comes out highest degree first.


use tracing::instrument;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::{Interpolant, InterpolationReport};
use crate::interpolation::traits::Interpolator;
use crate::linear_systems::direct::{solve, GaussCfg, PivotMode};
use crate::linear_systems::{DirectSolveError, LinearSystem};


/// Vandermonde interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `degree` : requested degree, `1 <= degree <= n - 1` (default `n - 1`)
#[derive(Debug, Clone, Copy)]
pub struct VandermondeCfg<'a> {
    common: CommonCfg<'a>,
    degree: Option<usize>,
}
impl<'a> VandermondeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), degree: None }
    }

    pub fn set_degree(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v == 0 {
            return Err(InterpolationError::InvalidDegree { got: v });
        }
        self.degree = Some(v);
        Ok(self)
    }

    pub fn degree(&self) -> Option<usize> { self.degree }
}
impl Default for VandermondeCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(VandermondeCfg<'a>);


/// Rows `[x^d, ..., x, 1]` for each node.
fn vandermonde_rows(x: &[f64], degree: usize) -> Vec<Vec<f64>> {
    x.iter()
        .map(|&xi| (0..=degree).rev().map(|p| xi.powi(p as i32)).collect())
        .collect()
}


fn solve_coefficients(rows: Vec<Vec<f64>>, rhs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let system = LinearSystem::new(&rows, rhs).map_err(DirectSolveError::from)?;
    let result = solve(&system, GaussCfg::new().set_pivot(PivotMode::Partial))?;
    Ok(result.solution)
}


/// Fits `Vᵀ V c = Vᵀ y`.
fn least_squares(v: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let m = v[0].len();
    let mut normal = vec![vec![0.0; m]; m];
    let mut rhs = vec![0.0; m];
    for (row, &yi) in v.iter().zip(y) {
        for i in 0..m {
            rhs[i] += row[i] * yi;
            for j in 0..m {
                normal[i][j] += row[i] * row[j];
            }
        }
    }
    solve_coefficients(normal, &rhs)
}


/// Builds the interpolating (or least-squares) polynomial.
///
/// # Returns
/// [`InterpolationReport`] with an [`Interpolant::Polynomial`] whose
/// coefficients are highest degree first.
///
/// # Errors
/// - [`InterpolationError::DegreeTooHigh`] : `degree >= n`; message names `n - 1`
/// - [`InterpolationError::Solve`]         : the coefficient system is singular
#[instrument(skip(cfg), fields(n = cfg.common.x().len(), degree = ?cfg.degree))]
pub fn interpolate(cfg: VandermondeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let y = cfg.common.y();
    let n = x.len();

    let max = n - 1;
    let degree = cfg.degree.unwrap_or(max);
    if degree > max {
        return Err(InterpolationError::DegreeTooHigh { degree, points: n, max });
    }

    let rows = vandermonde_rows(x, degree);
    let (coefficients, message) = if degree == max {
        (solve_coefficients(rows, y)?, format!("interpolating polynomial of degree {degree}"))
    } else {
        (
            least_squares(&rows, y)?,
            format!("least-squares polynomial of degree {degree} over {n} points"),
        )
    };

    let polynomial = Polynomial::new(coefficients);
    if degree == max {
        tracing::debug!(node_error = ?polynomial.max_node_error(x, y), "vandermonde fit");
    }
    InterpolationReport::new(
        Algorithm::Vandermonde,
        n,
        Interpolant::Polynomial(polynomial),
        cfg.common.x_eval(),
        message,
    )
}
