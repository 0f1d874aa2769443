//! Linear spline: `S_i(x) = y_i + m_i (x - x_i)` on `[x_i, x_{i+1}]`.

use tracing::instrument;

use super::helpers::{sorted_points, spacings};
use super::{PiecewisePolynomial, SplinePiece};
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::report::{Interpolant, InterpolationReport};


#[derive(Debug, Copy, Clone, Default)]
pub struct LinearSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LinearSplineCfg<'a>);


/// Builds `n - 1` linear pieces over the sorted nodes.
///
/// # Errors
/// - [`InterpolationError::OutOfBounds`] : an `x_eval` point outside `[min x, max x]`
#[instrument(skip(cfg), fields(n = cfg.common.x().len()))]
pub fn interpolate(cfg: LinearSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;
    let (x, y) = sorted_points(cfg.common.x(), cfg.common.y());
    let h = spacings(&x);

    let pieces = h
        .iter()
        .enumerate()
        .map(|(i, &hi)| {
            let slope = (y[i + 1] - y[i]) / hi;
            SplinePiece::from_local(x[i], x[i + 1], Polynomial::new(vec![slope, y[i]]))
        })
        .collect::<Vec<_>>();

    let n = x.len();
    let spline = PiecewisePolynomial::new(x, pieces);
    InterpolationReport::new(
        Algorithm::LinearSpline,
        n,
        Interpolant::Piecewise(spline),
        cfg.common.x_eval(),
        format!("linear spline with {} pieces", n - 1),
    )
}
