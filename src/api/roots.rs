//! Root-finding requests. The numbers arrive as JSON-like parameters, the
//! functions as caller-supplied callables in [`Functions`].

use serde::Deserialize;
use tracing::instrument;

use super::errors::ApiError;
use super::request::to_json;
use super::response::Response;
use crate::comparison::{compare_root_finders, ComparisonError, RootComparisonCfg, RootFunctions};
use crate::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use crate::root_finding::config::{DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use crate::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use crate::root_finding::incremental::{incremental_search, IncrementalCfg, IncrementalError};
use crate::root_finding::multiple_roots::{multiple_roots, MultipleRootsCfg, MultipleRootsError};
use crate::root_finding::newton::{newton, NewtonCfg, NewtonError};
use crate::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use crate::root_finding::secant::{secant, SecantCfg, SecantError};
use crate::root_finding::{Algorithm, Precision, RootResult, StopMode};
use crate::trace::ErrorKind;


type Callable = Box<dyn Fn(f64) -> f64>;
type Fx<'a> = &'a dyn Fn(f64) -> f64;

/// Callables for one equation `f(x) = 0`.
pub struct Functions {
    f   : Callable,
    g   : Option<Callable>,
    df  : Option<Callable>,
    ddf : Option<Callable>,
}

impl Functions {
    pub fn new(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self { f: Box::new(f), g: None, df: None, ddf: None }
    }

    #[must_use]
    pub fn with_g(mut self, g: impl Fn(f64) -> f64 + 'static) -> Self {
        self.g = Some(Box::new(g));
        self
    }

    #[must_use]
    pub fn with_df(mut self, df: impl Fn(f64) -> f64 + 'static) -> Self {
        self.df = Some(Box::new(df));
        self
    }

    #[must_use]
    pub fn with_ddf(mut self, ddf: impl Fn(f64) -> f64 + 'static) -> Self {
        self.ddf = Some(Box::new(ddf));
        self
    }

    pub fn borrowed(&self) -> RootFunctions<'_> {
        RootFunctions {
            f   : self.f.as_ref(),
            g   : self.g.as_deref(),
            df  : self.df.as_deref(),
            ddf : self.ddf.as_deref(),
        }
    }
}

impl std::fmt::Debug for Functions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Functions")
            .field("g", &self.g.is_some())
            .field("df", &self.df.is_some())
            .field("ddf", &self.ddf.is_some())
            .finish_non_exhaustive()
    }
}


fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
fn default_max_iter() -> usize { DEFAULT_MAX_ITER }


/// Stopping parameters shared by every tolerance-driven method.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StopParams {
    #[serde(default = "default_tolerance")]
    pub tolerance  : f64,
    #[serde(default = "default_max_iter")]
    pub max_iter   : usize,
    #[serde(default)]
    pub error_kind : ErrorKind,
    #[serde(default)]
    pub abs_fx     : Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BracketParams {
    pub xi : f64,
    pub xs : f64,
    #[serde(flatten)]
    pub stop : StopParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncrementalParams {
    pub x0    : f64,
    pub delta : f64,
    #[serde(default = "default_max_iter")]
    pub max_iter : usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenParams {
    pub x0 : f64,
    #[serde(default)]
    pub mode : Option<StopMode>,
    #[serde(default)]
    pub precision : Option<Precision>,
    #[serde(flatten)]
    pub stop : StopParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecantParams {
    pub x0 : f64,
    pub x1 : f64,
    #[serde(default)]
    pub precision : Option<Precision>,
    #[serde(flatten)]
    pub stop : StopParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompareParams {
    #[serde(default)]
    pub xi : Option<f64>,
    #[serde(default)]
    pub xs : Option<f64>,
    #[serde(default)]
    pub x0 : Option<f64>,
    #[serde(default)]
    pub x1 : Option<f64>,
    #[serde(flatten)]
    pub stop : StopParams,
}


/// Every root-finding operation.
///
/// `mode` applies to fixed point and multiple roots, `precision` to Newton
/// and secant; sending either to another method is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum RootRequest {
    Bisection(BracketParams),
    RegulaFalsi(BracketParams),
    IncrementalSearch(IncrementalParams),
    FixedPoint(OpenParams),
    Newton(OpenParams),
    Secant(SecantParams),
    MultipleRoots(OpenParams),
    Compare(CompareParams),
}


/// Applies `$stop` to a root-finding config built with `impl_common_cfg!`.
macro_rules! root_cfg {
    ($cfg:expr, $stop:expr) => {{
        let mut cfg = $cfg
            .set_tolerance($stop.tolerance)?
            .set_max_iter($stop.max_iter)?
            .set_error_kind($stop.error_kind);
        if let Some(v) = $stop.abs_fx {
            cfg = cfg.set_abs_fx(v)?;
        }
        cfg
    }};
}


fn require<'a>(
    handle: Option<Fx<'a>>,
    method: Algorithm,
    name: &'static str,
) -> Result<Fx<'a>, ApiError> {
    handle.ok_or(ApiError::MissingFunction { method: method.display_name(), name })
}


fn reject(present: bool, method: Algorithm, name: &'static str) -> Result<(), ApiError> {
    if present {
        return Err(ApiError::UnsupportedParameter { method: method.display_name(), name });
    }
    Ok(())
}


fn compare(p: &CompareParams, funcs: RootFunctions<'_>) -> Result<Response, ComparisonError> {
    let mut cfg = root_cfg!(RootComparisonCfg::new(), p.stop);
    // a lone bound is reported as a non-finite one
    if p.xi.is_some() || p.xs.is_some() {
        cfg = cfg.set_bracket(p.xi.unwrap_or(f64::NAN), p.xs.unwrap_or(f64::NAN))?;
    }
    if let Some(x0) = p.x0 {
        cfg = cfg.set_x0(x0)?;
    }
    if let Some(x1) = p.x1 {
        cfg = cfg.set_x1(x1)?;
    }
    Ok(Response::from_summary(&compare_root_finders(funcs, &cfg)?))
}


fn run_bisection(f: Fx<'_>, p: &BracketParams) -> Result<RootResult, BisectionError> {
    bisection(f, p.xi, p.xs, root_cfg!(BisectionCfg::new(), p.stop))
}

fn run_regula_falsi(f: Fx<'_>, p: &BracketParams) -> Result<RootResult, RegulaFalsiError> {
    regula_falsi(f, p.xi, p.xs, root_cfg!(RegulaFalsiCfg::new(), p.stop))
}

fn run_incremental(f: Fx<'_>, p: &IncrementalParams) -> Result<RootResult, IncrementalError> {
    incremental_search(f, p.x0, p.delta, IncrementalCfg::new().set_max_iter(p.max_iter)?)
}

fn run_fixed_point(f: Fx<'_>, g: Fx<'_>, p: &OpenParams) -> Result<RootResult, FixedPointError> {
    let cfg = root_cfg!(FixedPointCfg::new(), p.stop).set_mode(p.mode.unwrap_or_default());
    fixed_point(f, g, p.x0, cfg)
}

fn run_newton(f: Fx<'_>, df: Fx<'_>, p: &OpenParams) -> Result<RootResult, NewtonError> {
    let mut cfg = root_cfg!(NewtonCfg::new(), p.stop);
    if let Some(precision) = p.precision {
        cfg = cfg.set_precision(precision)?;
    }
    newton(f, df, p.x0, cfg)
}

fn run_secant(f: Fx<'_>, p: &SecantParams) -> Result<RootResult, SecantError> {
    let mut cfg = root_cfg!(SecantCfg::new(), p.stop);
    if let Some(precision) = p.precision {
        cfg = cfg.set_precision(precision)?;
    }
    secant(f, p.x0, p.x1, cfg)
}

fn run_multiple_roots(
    f: Fx<'_>,
    df: Fx<'_>,
    ddf: Fx<'_>,
    p: &OpenParams,
) -> Result<RootResult, MultipleRootsError> {
    let cfg = root_cfg!(MultipleRootsCfg::new(), p.stop).set_mode(p.mode.unwrap_or_default());
    multiple_roots(f, df, ddf, p.x0, cfg)
}


fn run(request: &RootRequest, funcs: RootFunctions<'_>) -> Result<Response, ApiError> {
    let f = funcs.f;
    let response = match request {
        RootRequest::Bisection(p)         => Response::from_result(run_bisection(f, p)),
        RootRequest::RegulaFalsi(p)       => Response::from_result(run_regula_falsi(f, p)),
        RootRequest::IncrementalSearch(p) => Response::from_result(run_incremental(f, p)),
        RootRequest::FixedPoint(p) => {
            reject(p.precision.is_some(), Algorithm::FixedPoint, "precision")?;
            let g = require(funcs.g, Algorithm::FixedPoint, "g")?;
            Response::from_result(run_fixed_point(f, g, p))
        }
        RootRequest::Newton(p) => {
            reject(p.mode.is_some(), Algorithm::Newton, "mode")?;
            let df = require(funcs.df, Algorithm::Newton, "df")?;
            Response::from_result(run_newton(f, df, p))
        }
        RootRequest::Secant(p) => Response::from_result(run_secant(f, p)),
        RootRequest::MultipleRoots(p) => {
            reject(p.precision.is_some(), Algorithm::MultipleRoots, "precision")?;
            let df = require(funcs.df, Algorithm::MultipleRoots, "df")?;
            let ddf = require(funcs.ddf, Algorithm::MultipleRoots, "ddf")?;
            Response::from_result(run_multiple_roots(f, df, ddf, p))
        }
        RootRequest::Compare(p) => {
            compare(p, funcs).unwrap_or_else(|e| Response::failure(e.to_string()))
        }
    };
    Ok(response)
}


/// Runs one root-finding request against `funcs`.
#[instrument(skip(request, funcs))]
pub fn handle_roots(request: &RootRequest, funcs: &Functions) -> Response {
    run(request, funcs.borrowed()).unwrap_or_else(|e| Response::failure(e.to_string()))
}


/// Parses a JSON root-finding request and runs it against `funcs`.
pub fn handle_roots_json(input: &str, funcs: &Functions) -> String {
    let response = match serde_json::from_str::<RootRequest>(input) {
        Ok(request) => handle_roots(&request, funcs),
        Err(e)      => Response::failure(ApiError::from(e).to_string()),
    };
    to_json(&response)
}
