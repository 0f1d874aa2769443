//! Shared configuration for the stationary iterative solvers.
//!
//! [`CommonCfg`]
//! ├ `x0`         : initial guess (zeros when unset)
//! ├ `tolerance`  : stopping threshold on `||x_{k+1} - x_k||`
//! ├ `max_iter`   : sweep cap
//! └ `error_kind` : absolute (max-component) or relative norm

use crate::trace::ErrorKind;


pub const DEFAULT_TOLERANCE : f64   = 1e-7;
pub const DEFAULT_MAX_ITER  : usize = 100;


#[derive(Debug, Clone, PartialEq)]
pub struct CommonCfg {
    x0         : Option<Vec<f64>>,
    tolerance  : f64,
    max_iter   : usize,
    error_kind : ErrorKind,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            x0         : None,
            tolerance  : DEFAULT_TOLERANCE,
            max_iter   : DEFAULT_MAX_ITER,
            error_kind : ErrorKind::default(),
        }
    }

    // getters
    pub fn x0(&self)         -> Option<&[f64]> { self.x0.as_deref() }
    pub fn tolerance(&self)  -> f64            { self.tolerance }
    pub fn max_iter(&self)   -> usize          { self.max_iter }
    pub fn error_kind(&self) -> ErrorKind      { self.error_kind }

    // setters (internal)
    pub(crate) fn with_x0         (&mut self, v: Vec<f64>)  { self.x0         = Some(v); }
    pub(crate) fn with_tolerance  (&mut self, v: f64)       { self.tolerance  = v; }
    pub(crate) fn with_max_iter   (&mut self, v: usize)     { self.max_iter   = v; }
    pub(crate) fn with_error_kind (&mut self, v: ErrorKind) { self.error_kind = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


macro_rules! impl_iterative_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Initial guess; its length is checked against `n` when solving.
            pub fn set_x0(
                mut self, v: &[f64]
            ) -> Result<Self, $crate::linear_systems::errors::IterativeError> {
                if let Some(idx) = v.iter().position(|x| !x.is_finite()) {
                    return Err(
                        $crate::linear_systems::errors::IterativeError::NonFiniteGuess { idx }
                    );
                }
                self.common.with_x0(v.to_vec());
                Ok(self)
            }
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::linear_systems::errors::IterativeError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::linear_systems::errors::IterativeError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::linear_systems::errors::IterativeError> {
                if v == 0 {
                    return Err(
                        $crate::linear_systems::errors::IterativeError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            #[must_use]
            pub fn set_error_kind(mut self, v: $crate::trace::ErrorKind) -> Self {
                self.common.with_error_kind(v);
                self
            }
            pub fn common(&self) -> &$crate::linear_systems::iterative::config::CommonCfg {
                &self.common
            }
        }
    };
}
pub(crate) use impl_iterative_cfg;


macro_rules! impl_with_common {
    ($cfg:ty) => {
        impl $cfg {
            #[must_use]
            pub(crate) fn with_common(
                mut self, v: $crate::linear_systems::iterative::config::CommonCfg
            ) -> Self {
                self.common = v;
                self
            }
        }
    };
}
pub(crate) use impl_with_common;
