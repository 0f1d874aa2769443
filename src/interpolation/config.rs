//! Node and evaluation-point configuration shared by every interpolator.
//!
//! [`CommonCfg`]
//! ├ `x`      : nodes, pairwise distinct, any order
//! ├ `y`      : values at the nodes
//! ├ `x_eval` : points to evaluate the interpolant at (may be empty)
//! └ `x_tol`  : nodes closer than this count as repeated, [`DEFAULT_X_TOL`]
//!
//! Each method's config embeds a [`CommonCfg`] and gets the validating
//! `set_x / set_y / set_x_eval / set_x_tol` builders from `impl_common_cfg!`.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    x      : &'a [f64],
    y      : &'a [f64],
    x_eval : &'a [f64],
    x_tol  : f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[], x_eval: &[], x_tol: DEFAULT_X_TOL }
    }

    pub fn x(&self)      -> &'a [f64] { self.x }
    pub fn y(&self)      -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_tol(&self)  -> f64       { self.x_tol }

    /// Final check before building: both sides present, same length, at
    /// least two distinct nodes.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if self.x.len() != self.y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        if self.x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: self.x.len() });
        }
        repeated_x(self.x, self.x_tol)
    }

    pub(crate) fn assign_x(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        finite_non_empty(v)?;
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        repeated_x(v, self.x_tol)?;
        matching_len(v.len(), self.y.len())?;
        self.x = v;
        Ok(())
    }

    pub(crate) fn assign_y(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        finite_non_empty(v)?;
        matching_len(self.x.len(), v.len())?;
        self.y = v;
        Ok(())
    }

    pub(crate) fn assign_x_eval(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        self.x_eval = v;
        Ok(())
    }

    pub(crate) fn assign_x_tol(&mut self, v: f64) -> Result<(), InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(())
    }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


fn non_finite_idx(v: &[f64]) -> Option<usize> {
    v.iter().position(|x| !x.is_finite())
}

fn finite_non_empty(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    match non_finite_idx(v) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None      => Ok(()),
    }
}

/// An unset side (length 0) never conflicts.
fn matching_len(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

/// Nodes may arrive unsorted; neighbours of a sorted copy are compared.
pub(crate) fn repeated_x(x: &[f64], tol: f64) -> Result<(), InterpolationError> {
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);
    match sorted.windows(2).find(|w| (w[1] - w[0]).abs() < tol) {
        Some(w) => Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] }),
        None    => Ok(()),
    }
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self, v: &'a [f64]
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.assign_x(v)?;
                Ok(self)
            }
            pub fn set_y(
                mut self, v: &'a [f64]
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.assign_y(v)?;
                Ok(self)
            }
            pub fn set_x_eval(
                mut self, v: &'a [f64]
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.assign_x_eval(v)?;
                Ok(self)
            }
            pub fn set_x_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.assign_x_tol(v)?;
                Ok(self)
            }
            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
