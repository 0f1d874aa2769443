//! Natural cubic spline.
//!
//! On each interval `S_i(t) = a_i + b_i t + c_i t² + d_i t³` with
//! `t = x - x_i`. The interior `c_i` solve the tridiagonal system
//!
//! ```text
//! h_{i-1} c_{i-1} + 2(h_{i-1} + h_i) c_i + h_i c_{i+1}
//!     = 3[(y_{i+1} - y_i)/h_i - (y_i - y_{i-1})/h_{i-1}]
//! ```
//!
//! with `c_0 = c_{n-1} = 0`. The system is factored as `L U` (unit lower and
//! upper bidiagonal) and solved with two triangular solves.

use nalgebra::{DMatrix, DVector};
use tracing::instrument;

use super::helpers::{cubic_coeffs, sorted_points, spacings};
use super::{PiecewisePolynomial, SplinePiece};
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::{Interpolant, InterpolationReport};


#[derive(Debug, Copy, Clone, Default)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


/// All `n` second-derivative coefficients `c`, zero at both ends.
fn solve_c_natural(h: &[f64], y: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let n = y.len();
    let m = n.saturating_sub(2);
    let mut c_full = vec![0.0; n];
    if m == 0 {
        return Ok(c_full);
    }

    let mut l = DMatrix::<f64>::identity(m, m);
    let mut u = DMatrix::<f64>::zeros(m, m);
    let mut rhs = DVector::<f64>::zeros(m);

    let diag = |k: usize| 2.0 * (h[k] + h[k + 1]);
    u[(0, 0)] = diag(0);
    for k in 0..m {
        let i = k + 1;
        rhs[k] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        if k + 1 < m {
            // super-diagonal h_i, sub-diagonal h_i of the next row
            u[(k, k + 1)] = h[i];
            l[(k + 1, k)] = h[i] / u[(k, k)];
            u[(k + 1, k + 1)] = diag(k + 1) - l[(k + 1, k)] * h[i];
        }
    }

    if !l.solve_lower_triangular_mut(&mut rhs) || !u.solve_upper_triangular_mut(&mut rhs) {
        return Err(InterpolationError::SingularSpline);
    }

    c_full[1..=m].copy_from_slice(rhs.as_slice());
    Ok(c_full)
}


/// Builds the natural cubic spline over the sorted nodes.
///
/// With two nodes the spline is the straight line through them.
///
/// # Errors
/// - [`InterpolationError::OutOfBounds`]   : an `x_eval` point outside `[min x, max x]`
/// - [`InterpolationError::SingularSpline`] : the tridiagonal system broke down
#[instrument(skip(cfg), fields(n = cfg.common.x().len()))]
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let (x, y) = sorted_points(cfg.common.x(), cfg.common.y());
    let h = spacings(&x);

    let c = solve_c_natural(&h, &y)?;
    let (b, d) = cubic_coeffs(&h, &y, &c)?;

    let pieces = (0..h.len())
        .map(|i| {
            let local = Polynomial::new(vec![d[i], c[i], b[i], y[i]]);
            SplinePiece::from_local(x[i], x[i + 1], local)
        })
        .collect::<Vec<_>>();

    let n = x.len();
    let spline = PiecewisePolynomial::new(x, pieces);
    InterpolationReport::new(
        Algorithm::CubicSpline,
        n,
        Interpolant::Piecewise(spline),
        cfg.common.x_eval(),
        format!("natural cubic spline with {} pieces", n - 1),
    )
}
