//! Display precision for reported roots.
//!
//! Formatting only: the iteration itself always runs in full `f64`.
//!
//! - [`Precision::Decimals`]    : fixed number of digits after the point
//! - [`Precision::Significant`] : number of significant digits, switching to
//!   scientific notation for very small or very large magnitudes

use serde::{Deserialize, Serialize};

use super::errors::ToleranceError;

pub const MAX_DIGITS: u32 = 17;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    #[serde(alias = "decimales")]
    Decimals(u32),
    #[serde(alias = "significativas")]
    Significant(u32),
}

impl Precision {
    pub(crate) fn validate(self) -> Result<Self, ToleranceError> {
        let (got, min) = match self {
            Precision::Decimals(d)    => (d, 0),
            Precision::Significant(s) => (s, 1),
        };
        if got < min || got > MAX_DIGITS {
            return Err(ToleranceError::InvalidPrecision { got, min, max: MAX_DIGITS });
        }
        Ok(self)
    }

    pub fn format(self, x: f64) -> String {
        if !x.is_finite() {
            return x.to_string();
        }
        match self {
            Precision::Decimals(d)    => format!("{:.*}", d as usize, x),
            Precision::Significant(s) => format_significant(x, s),
        }
    }
}


fn format_significant(x: f64, digits: u32) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let digits   = digits.max(1) as i32;
    let exponent = x.abs().log10().floor() as i32;

    if exponent < -5 || exponent >= digits {
        let s = format!("{:.*e}", (digits - 1) as usize, x);
        return trim_mantissa(&s);
    }

    let decimals = (digits - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, x))
}

// "1.500" -> "1.5", "2.000" -> "2"
fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn trim_mantissa(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None                  => s.to_string(),
    }
}
