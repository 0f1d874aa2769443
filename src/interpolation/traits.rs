//! The [`Interpolator`] trait implemented by every interpolant.

use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// Value at `x`. Piecewise interpolants fail outside their [`domain`](Self::domain).
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// Closed interval where `eval` is defined; `None` means all of ℝ.
    fn domain(&self) -> Option<[f64; 2]> { None }

    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// `max_i |p(x_i) - y_i|` over the nodes.
    fn max_node_error(&self, x: &[f64], y: &[f64]) -> Result<f64, InterpolationError> {
        let mut worst = 0.0_f64;
        for (&xi, &yi) in x.iter().zip(y) {
            worst = worst.max((self.eval(xi)? - yi).abs());
        }
        Ok(worst)
    }
}
