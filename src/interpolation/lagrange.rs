//! Lagrange interpolation
//!
//! `P(x) = Σ y_i L_i(x)` with `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`,
//! each basis polynomial expanded into monomial coefficients.


use tracing::instrument;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::{Interpolant, InterpolationReport};


#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Basis polynomial `L_i`.
pub fn basis(x: &[f64], i: usize) -> Polynomial {
    let mut numerator = Polynomial::constant(1.0);
    let mut denominator = 1.0;
    for (j, &xj) in x.iter().enumerate() {
        if j != i {
            numerator = numerator.mul_linear(xj);
            denominator *= x[i] - xj;
        }
    }
    numerator.scale(1.0 / denominator)
}


/// Performs Lagrange interpolation.
///
/// # Returns
/// [`InterpolationReport`] with the expanded degree `n - 1` polynomial.
#[instrument(skip(cfg), fields(n = cfg.common.x().len()))]
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let y = cfg.common.y();

    let polynomial = (0..x.len())
        .map(|i| basis(x, i).scale(y[i]))
        .fold(Polynomial::constant(0.0), |acc, term| acc.add(&term));

    InterpolationReport::new(
        Algorithm::Lagrange,
        x.len(),
        Interpolant::Polynomial(polynomial),
        cfg.common.x_eval(),
        format!("Lagrange interpolating polynomial of degree {}", x.len() - 1),
    )
}
