//! Defines the struct returned by all interpolation algorithms.
//!
//! [`InterpolationReport`] carries the constructed [`Interpolant`], its
//! human-readable form, and its values at the requested evaluation points.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::Polynomial;
use crate::interpolation::spline::PiecewisePolynomial;
use crate::interpolation::traits::Interpolator;


/// A single polynomial or a spline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Interpolant {
    Polynomial(Polynomial),
    Piecewise(PiecewisePolynomial),
}

impl Interpolant {
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        match self {
            Interpolant::Polynomial(p) => Some(p),
            Interpolant::Piecewise(_)  => None,
        }
    }

    pub fn as_piecewise(&self) -> Option<&PiecewisePolynomial> {
        match self {
            Interpolant::Polynomial(_) => None,
            Interpolant::Piecewise(s)  => Some(s),
        }
    }
}

impl Interpolator for Interpolant {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolant::Polynomial(p) => p.eval(x),
            Interpolant::Piecewise(s)  => s.eval(x),
        }
    }

    fn domain(&self) -> Option<[f64; 2]> {
        match self {
            Interpolant::Polynomial(p) => p.domain(),
            Interpolant::Piecewise(s)  => s.domain(),
        }
    }
}

impl std::fmt::Display for Interpolant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpolant::Polynomial(p) => write!(f, "{p}"),
            Interpolant::Piecewise(s)  => write!(f, "{s}"),
        }
    }
}


/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm`           : interpolation method
/// - `n_provided`          : number of input data points `(x, y)`
/// - `n_evaluated`         : number of requested evaluation points
/// - `evaluated`           : interpolant values at each evaluation point
/// - `interpolant`         : the constructed polynomial or spline
/// - `expression`          : `interpolant` rendered as text
/// - `divided_differences` : Newton table, column `k` holding order-`k` differences
/// - `message`             : human-readable outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    pub algorithm           : Algorithm,
    pub n_provided          : usize,
    pub n_evaluated         : usize,
    pub evaluated           : Vec<f64>,
    pub interpolant         : Interpolant,
    pub expression          : String,
    pub divided_differences : Option<Vec<Vec<f64>>>,
    pub message             : String,
}

impl InterpolationReport {
    /// Evaluates `interpolant` at `x_eval` and assembles the report.
    pub(crate) fn new(
        algorithm: Algorithm,
        n_provided: usize,
        interpolant: Interpolant,
        x_eval: &[f64],
        message: String,
    ) -> Result<Self, InterpolationError> {
        let evaluated = interpolant.eval_many(x_eval)?;
        tracing::debug!(
            algorithm = algorithm.algorithm_name(),
            n_provided,
            n_evaluated = x_eval.len(),
            "interpolant built"
        );
        Ok(Self {
            algorithm,
            n_provided,
            n_evaluated: x_eval.len(),
            evaluated,
            expression: interpolant.to_string(),
            interpolant,
            divided_differences: None,
            message,
        })
    }
}
