//! Dense polynomials in the monomial basis.
//!
//! Coefficients are stored highest degree first, so `[2, -3, 1]` is
//! `2x² - 3x + 1`. Evaluation uses Horner's scheme.

use serde::Serialize;

use super::errors::InterpolationError;
use super::traits::Interpolator;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// From coefficients highest degree first. Leading zeros are dropped; an
    /// empty slice is the zero polynomial.
    pub fn new(coefficients: Vec<f64>) -> Self {
        let first = coefficients.iter().position(|&c| c != 0.0);
        let coefficients = match first {
            Some(i) => coefficients[i..].to_vec(),
            None    => vec![0.0],
        };
        Self { coefficients }
    }

    pub fn constant(c: f64) -> Self { Self::new(vec![c]) }

    pub fn coefficients(&self) -> &[f64] { &self.coefficients }

    pub fn degree(&self) -> usize { self.coefficients.len() - 1 }

    /// Horner evaluation.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// `self * (x - r)`
    pub(crate) fn mul_linear(&self, r: f64) -> Self {
        let n = self.coefficients.len();
        let mut out = vec![0.0; n + 1];
        for (i, &c) in self.coefficients.iter().enumerate() {
            out[i]     += c;
            out[i + 1] -= c * r;
        }
        Self::new(out)
    }

    pub(crate) fn scale(&self, s: f64) -> Self {
        Self::new(self.coefficients.iter().map(|c| c * s).collect())
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let n = self.coefficients.len().max(other.coefficients.len());
        let mut out = vec![0.0; n];
        for (dst, c) in out.iter_mut().rev().zip(self.coefficients.iter().rev()) {
            *dst += c;
        }
        for (dst, c) in out.iter_mut().rev().zip(other.coefficients.iter().rev()) {
            *dst += c;
        }
        Self::new(out)
    }

    /// Re-expands `p(x - shift)` in powers of `x`.
    pub(crate) fn shifted(&self, shift: f64) -> Self {
        self.coefficients
            .iter()
            .fold(Polynomial::constant(0.0), |acc, &c| acc.mul_linear(shift).add(&Polynomial::constant(c)))
    }
}

impl Interpolator for Polynomial {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.evaluate(x))
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let deg = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 && !(first && i == deg) {
                continue;
            }
            let power = deg - i;
            let sign = if c < 0.0 { "-" } else { "+" };
            let mag = c.abs();

            if first {
                if c < 0.0 { write!(f, "-")?; }
            } else {
                write!(f, " {sign} ")?;
            }
            match power {
                0 => write!(f, "{mag}")?,
                1 => write!(f, "{mag}x")?,
                p => write!(f, "{mag}x^{p}")?,
            }
            first = false;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_form() {
        let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
        assert_eq!(p.evaluate(2.0), 3.0);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn leading_zeros_are_trimmed() {
        assert_eq!(Polynomial::new(vec![0.0, 0.0, 5.0]).coefficients(), &[5.0]);
        assert_eq!(Polynomial::new(vec![]).degree(), 0);
    }

    #[test]
    fn products_and_shifts() {
        // (x - 1)(x - 2) = x² - 3x + 2
        let p = Polynomial::constant(1.0).mul_linear(1.0).mul_linear(2.0);
        assert_eq!(p.coefficients(), &[1.0, -3.0, 2.0]);
        // t² with t = x - 1
        let q = Polynomial::new(vec![1.0, 0.0, 0.0]).shifted(1.0);
        assert_eq!(q.coefficients(), &[1.0, -2.0, 1.0]);
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Polynomial::new(vec![2.0, -3.0, 0.0, 1.5]).to_string(), "2x^3 - 3x^2 + 1.5");
        assert_eq!(Polynomial::new(vec![-1.0, 0.0]).to_string(), "-1x");
        assert_eq!(Polynomial::constant(0.0).to_string(), "0");
    }
}
