//! Piecewise polynomial interpolants.
//!
//! ┌ [`linear`]  : one straight segment per interval
//! └ [`natural`] : natural cubic spline (`S'' = 0` at both ends)
//!
//! Both sort the nodes by `x` before building, so pieces come out in
//! increasing `x` whatever order the caller supplied.

pub(crate) mod helpers;
pub mod linear;
pub mod natural;

use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::traits::Interpolator;
use helpers::find_interval;


/// One interval-restricted piece of a spline.
///
/// - `interval`   : `[x_i, x_{i+1}]`
/// - `polynomial` : the piece expanded in powers of `x`
/// - `local`      : the same piece in powers of `t = x - x_i`, used for evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplinePiece {
    pub interval   : [f64; 2],
    pub polynomial : Polynomial,
    #[serde(skip)]
    pub local      : Polynomial,
}

impl SplinePiece {
    pub(crate) fn from_local(x0: f64, x1: f64, local: Polynomial) -> Self {
        Self { interval: [x0, x1], polynomial: local.shifted(x0), local }
    }
}


/// Ordered sequence of [`SplinePiece`]s over sorted knots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiecewisePolynomial {
    knots  : Vec<f64>,
    pieces : Vec<SplinePiece>,
}

impl PiecewisePolynomial {
    /// `knots.len() == pieces.len() + 1`, knots strictly increasing.
    pub(crate) fn new(knots: Vec<f64>, pieces: Vec<SplinePiece>) -> Self {
        debug_assert_eq!(knots.len(), pieces.len() + 1);
        Self { knots, pieces }
    }

    pub fn knots(&self) -> &[f64] { &self.knots }

    pub fn pieces(&self) -> &[SplinePiece] { &self.pieces }
}

impl Interpolator for PiecewisePolynomial {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let n = self.knots.len();
        let (x_min, x_max) = (self.knots[0], self.knots[n - 1]);
        if !(x_min..=x_max).contains(&x) {
            return Err(InterpolationError::OutOfBounds { got: x, x_min, x_max });
        }
        let lo = find_interval(&self.knots, x);
        Ok(self.pieces[lo].local.evaluate(x - self.knots[lo]))
    }

    fn domain(&self) -> Option<[f64; 2]> {
        Some([self.knots[0], self.knots[self.knots.len() - 1]])
    }
}

impl std::fmt::Display for PiecewisePolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let [a, b] = piece.interval;
            write!(f, "[{a}, {b}]: {}", piece.polynomial)?;
        }
        Ok(())
    }
}
