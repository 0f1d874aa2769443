//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! The Newton form is expanded into monomial coefficients with the nested
//! (Horner-like) product `c0 + (x - x0)(c1 + (x - x1)(c2 + ...))`.


use tracing::instrument;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::{Interpolant, InterpolationReport};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Full divided-difference table.
///
/// `table[i][k] = f[x_{i-k}, ..., x_i]` for `k <= i`, zero above. The
/// diagonal `table[k][k]` holds the Newton coefficients.
pub fn divided_difference_table(x: &[f64], y: &[f64]) -> Vec<Vec<f64>> {
    let n = x.len();
    let mut table = vec![vec![0.0; n]; n];
    for i in 0..n {
        table[i][0] = y[i];
    }
    for k in 1..n {
        for i in k..n {
            table[i][k] = (table[i][k - 1] - table[i - 1][k - 1]) / (x[i] - x[i - k]);
        }
    }
    table
}


/// Expands `Σ c_k Π_{j<k} (x - x_j)` into monomial coefficients.
fn expand_newton_form(x: &[f64], c: &[f64]) -> Polynomial {
    let n = c.len();
    let mut p = Polynomial::constant(c[n - 1]);
    for j in (0..n - 1).rev() {
        p = p.mul_linear(x[j]).add(&Polynomial::constant(c[j]));
    }
    p
}


/// Performs Newton divided-difference interpolation.
///
/// # Returns
/// [`InterpolationReport`] with the degree `n - 1` polynomial and the full
/// `divided_differences` table.
#[instrument(skip(cfg), fields(n = cfg.common.x().len()))]
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let x = cfg.common.x();
    let y = cfg.common.y();
    let n = x.len();

    let table = divided_difference_table(x, y);
    let coeffs: Vec<f64> = (0..n).map(|k| table[k][k]).collect();
    let polynomial = expand_newton_form(x, &coeffs);

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        n,
        Interpolant::Polynomial(polynomial),
        cfg.common.x_eval(),
        format!("Newton interpolating polynomial of degree {}", n - 1),
    )?;
    report.divided_differences = Some(table);
    Ok(report)
}
