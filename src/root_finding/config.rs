//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! used by every tolerance-driven root-finding config.
//!
//! [`CommonCfg`]
//! ├ `tolerance`  : stopping threshold on the step error
//! ├ `max_iter`   : iteration cap
//! ├ `error_kind` : absolute or relative step error ([`ErrorKind`])
//! └ `abs_fx`     : optional residual tolerance, `|f(x)| <= abs_fx` also stops
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! Some algorithms (e.g. newton, fixed_point) have additional config arguments
//! such as display precision or a stop mode.

use serde::{Deserialize, Serialize};

use crate::trace::ErrorKind;


pub const DEFAULT_TOLERANCE : f64   = 1e-7;
pub const DEFAULT_MAX_ITER  : usize = 100;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance  : f64,
    max_iter   : usize,
    error_kind : ErrorKind,
    abs_fx     : Option<f64>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance  : DEFAULT_TOLERANCE,
            max_iter   : DEFAULT_MAX_ITER,
            error_kind : ErrorKind::default(),
            abs_fx     : None,
        }
    }

    // getters
    pub fn tolerance(&self)  -> f64         { self.tolerance }
    pub fn max_iter(&self)   -> usize       { self.max_iter }
    pub fn error_kind(&self) -> ErrorKind   { self.error_kind }
    pub fn abs_fx(&self)     -> Option<f64> { self.abs_fx }

    // setters (internal)
    pub(crate) fn with_tolerance  (&mut self, v: f64)       { self.tolerance  = v; }
    pub(crate) fn with_max_iter   (&mut self, v: usize)     { self.max_iter   = v; }
    pub(crate) fn with_error_kind (&mut self, v: ErrorKind) { self.error_kind = v; }
    pub(crate) fn with_abs_fx     (&mut self, v: f64)       { self.abs_fx     = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


/// How an iteration with a stopping tolerance decides to stop.
///
/// - [`StopMode::Tolerance`]       : stop once the step error is below tolerance
/// - [`StopMode::FixedIterations`] : run exactly `max_iter` steps, ignoring tolerance
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopMode {
    #[default]
    #[serde(alias = "error")]
    Tolerance,
    #[serde(alias = "iterations")]
    FixedIterations,
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidAbsFx { got: v }
                    );
                }
                self.common.with_abs_fx(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
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
            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Lets a comparison run hand one shared [`CommonCfg`] to each method config.
macro_rules! impl_with_common {
    ($cfg:ty) => {
        impl $cfg {
            #[must_use]
            pub(crate) fn with_common(
                mut self, v: $crate::root_finding::config::CommonCfg
            ) -> Self {
                self.common = v;
                self
            }
        }
    };
}
pub(crate) use impl_with_common;
