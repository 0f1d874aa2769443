//! Requests over plain numbers: error utilities, interpolation, linear
//! systems, Taylor series. Root finding needs callables; see
//! [`roots`](super::roots).
//!
//! Wire shape: `{"method": "<name>", "params": {...}}`. Optional knobs fall
//! back to the same defaults as the config builders.

use serde::Deserialize;
use tracing::instrument;

use super::errors::ApiError;
use super::response::Response;
use crate::comparison::{
    compare_iterative_solvers, ComparisonError, ComparisonReport, IterativeComparisonCfg,
};
use crate::error_metrics::{
    absolute_error, propagate, relative_error, relative_error_summary, Operation,
};
use crate::interpolation::{
    lagrange, newton, spline, vandermonde, Algorithm, InterpolationError, InterpolationReport,
};
use crate::linear_systems::direct::{solve, validate, DirectSolveResult, GaussCfg, PivotMode};
use crate::linear_systems::iterative::config;
use crate::linear_systems::iterative::{
    gauss_seidel, jacobi, sor, GaussSeidelCfg, IterativeMethod, IterativeSolveResult, JacobiCfg,
    SorCfg,
};
use crate::linear_systems::{DirectSolveError, IterativeError, LinearSystem};
use crate::taylor::{self, Series, TaylorCfg, TaylorError, TaylorReport};
use crate::trace::ErrorKind;


fn default_tolerance() -> f64 { config::DEFAULT_TOLERANCE }
fn default_max_iter() -> usize { config::DEFAULT_MAX_ITER }
fn default_taylor_tolerance() -> f64 { taylor::series::DEFAULT_TOLERANCE }
fn default_max_terms() -> usize { taylor::series::DEFAULT_MAX_TERMS }


#[derive(Debug, Clone, Deserialize)]
pub struct ErrorParams {
    pub approx : f64,
    pub exact  : f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropagateParams {
    pub x  : f64,
    pub ex : f64,
    pub y  : f64,
    pub ey : f64,
    pub op : Operation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterpolationParams {
    pub x      : Vec<f64>,
    pub y      : Vec<f64>,
    #[serde(default)]
    pub x_eval : Vec<f64>,
    #[serde(default)]
    pub degree : Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectParams {
    pub a            : Vec<Vec<f64>>,
    pub b            : Vec<f64>,
    #[serde(default)]
    pub pivot        : PivotMode,
    #[serde(default)]
    pub show_process : bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IterativeParams {
    pub a          : Vec<Vec<f64>>,
    pub b          : Vec<f64>,
    #[serde(default)]
    pub x0         : Option<Vec<f64>>,
    #[serde(default = "default_tolerance")]
    pub tolerance  : f64,
    #[serde(default = "default_max_iter")]
    pub max_iter   : usize,
    #[serde(default)]
    pub error_kind : ErrorKind,
    /// SOR and the comparison only; 1 when absent.
    #[serde(default)]
    pub omega      : Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaylorParams {
    pub theta      : f64,
    #[serde(default = "default_taylor_tolerance")]
    pub tolerance  : f64,
    #[serde(default = "default_max_terms")]
    pub max_terms  : usize,
    #[serde(default)]
    pub error_kind : ErrorKind,
}


/// Every numeric-only operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum Request {
    AbsoluteError(ErrorParams),
    RelativeError(ErrorParams),
    ErrorSummary(ErrorParams),
    Propagate(PropagateParams),

    Vandermonde(InterpolationParams),
    NewtonInterpolation(InterpolationParams),
    Lagrange(InterpolationParams),
    LinearSpline(InterpolationParams),
    CubicSpline(InterpolationParams),

    Gauss(DirectParams),
    Validate(DirectParams),
    Jacobi(IterativeParams),
    GaussSeidel(IterativeParams),
    Sor(IterativeParams),
    CompareIterative(IterativeParams),

    TaylorCos(TaylorParams),
    TaylorSin(TaylorParams),
}

impl Request {
    pub const fn method_name(&self) -> &'static str {
        match self {
            Request::AbsoluteError(_)       => "absolute_error",
            Request::RelativeError(_)       => "relative_error",
            Request::ErrorSummary(_)        => "error_summary",
            Request::Propagate(_)           => "propagate",
            Request::Vandermonde(_)         => "vandermonde",
            Request::NewtonInterpolation(_) => "newton_interpolation",
            Request::Lagrange(_)            => "lagrange",
            Request::LinearSpline(_)        => "linear_spline",
            Request::CubicSpline(_)         => "cubic_spline",
            Request::Gauss(_)               => "gauss",
            Request::Validate(_)            => "validate",
            Request::Jacobi(_)              => "jacobi",
            Request::GaussSeidel(_)         => "gauss_seidel",
            Request::Sor(_)                 => "sor",
            Request::CompareIterative(_)    => "compare_iterative",
            Request::TaylorCos(_)           => "taylor_cos",
            Request::TaylorSin(_)           => "taylor_sin",
        }
    }
}


/// Applies `$p`'s stopping parameters to an iterative solver config.
macro_rules! iterative_cfg {
    ($cfg:expr, $p:expr) => {{
        let mut cfg = $cfg
            .set_tolerance($p.tolerance)?
            .set_max_iter($p.max_iter)?
            .set_error_kind($p.error_kind);
        if let Some(x0) = &$p.x0 {
            cfg = cfg.set_x0(x0)?;
        }
        cfg
    }};
}


fn interpolate(
    algorithm: Algorithm,
    p: &InterpolationParams,
) -> Result<InterpolationReport, InterpolationError> {
    let (x, y, xe) = (p.x.as_slice(), p.y.as_slice(), p.x_eval.as_slice());
    match algorithm {
        Algorithm::Vandermonde => {
            let mut cfg = vandermonde::VandermondeCfg::new();
            if let Some(d) = p.degree {
                cfg = cfg.set_degree(d)?;
            }
            vandermonde::interpolate(cfg.set_x(x)?.set_y(y)?.set_x_eval(xe)?)
        }
        Algorithm::Newton => newton::interpolate(
            newton::NewtonCfg::new().set_x(x)?.set_y(y)?.set_x_eval(xe)?
        ),
        Algorithm::Lagrange => lagrange::interpolate(
            lagrange::LagrangeCfg::new().set_x(x)?.set_y(y)?.set_x_eval(xe)?
        ),
        Algorithm::LinearSpline => spline::linear::interpolate(
            spline::linear::LinearSplineCfg::new().set_x(x)?.set_y(y)?.set_x_eval(xe)?
        ),
        Algorithm::CubicSpline => spline::natural::interpolate(
            spline::natural::NaturalSplineCfg::new().set_x(x)?.set_y(y)?.set_x_eval(xe)?
        ),
    }
}


fn direct(p: &DirectParams) -> Result<DirectSolveResult, DirectSolveError> {
    let system = LinearSystem::new(&p.a, &p.b)?;
    solve(&system, GaussCfg::new().set_pivot(p.pivot).set_show_process(p.show_process))
}


fn iterate(
    method: IterativeMethod,
    p: &IterativeParams,
) -> Result<IterativeSolveResult, IterativeError> {
    let system = LinearSystem::new(&p.a, &p.b)?;
    match method {
        IterativeMethod::Jacobi => jacobi(&system, &iterative_cfg!(JacobiCfg::new(), p)),
        IterativeMethod::GaussSeidel => gauss_seidel(&system, &iterative_cfg!(GaussSeidelCfg::new(), p)),
        IterativeMethod::Sor => {
            let mut cfg = iterative_cfg!(SorCfg::new(), p);
            if let Some(w) = p.omega {
                cfg = cfg.set_omega(w)?;
            }
            sor(&system, &cfg)
        }
    }
}


/// `omega` belongs to SOR alone.
fn stationary(method: IterativeMethod, p: &IterativeParams) -> Response {
    if p.omega.is_some() && method != IterativeMethod::Sor {
        let e = ApiError::UnsupportedParameter { method: method.display_name(), name: "omega" };
        return Response::failure(e.to_string());
    }
    Response::from_result(iterate(method, p))
}


fn compare(p: &IterativeParams) -> Result<ComparisonReport<IterativeSolveResult>, ComparisonError> {
    let system = LinearSystem::new(&p.a, &p.b).map_err(IterativeError::from)?;
    let mut cfg = iterative_cfg!(IterativeComparisonCfg::new(), p);
    if let Some(w) = p.omega {
        cfg = cfg.set_omega(w)?;
    }
    compare_iterative_solvers(&system, &cfg)
}


fn expand(series: Series, p: &TaylorParams) -> Result<TaylorReport, TaylorError> {
    let cfg = TaylorCfg::new()
        .set_tolerance(p.tolerance)?
        .set_max_terms(p.max_terms)?
        .set_error_kind(p.error_kind);
    match series {
        Series::Cos => taylor::cos(p.theta, cfg),
        Series::Sin => taylor::sin(p.theta, cfg),
    }
}


/// Runs one request.
#[instrument(skip(request), fields(method = request.method_name()))]
pub fn handle(request: Request) -> Response {
    match &request {
        Request::AbsoluteError(p) => Response::from_result(absolute_error(p.approx, p.exact)),
        Request::RelativeError(p) => Response::from_result(relative_error(p.approx, p.exact)),
        Request::ErrorSummary(p)  => Response::from_result(relative_error_summary(p.approx, p.exact)),
        Request::Propagate(p)     => Response::from_result(propagate(p.x, p.ex, p.y, p.ey, p.op)),

        Request::Vandermonde(p)         => Response::from_result(interpolate(Algorithm::Vandermonde, p)),
        Request::NewtonInterpolation(p) => Response::from_result(interpolate(Algorithm::Newton, p)),
        Request::Lagrange(p)            => Response::from_result(interpolate(Algorithm::Lagrange, p)),
        Request::LinearSpline(p)        => Response::from_result(interpolate(Algorithm::LinearSpline, p)),
        Request::CubicSpline(p)         => Response::from_result(interpolate(Algorithm::CubicSpline, p)),

        Request::Gauss(p)    => Response::from_result(direct(p)),
        Request::Validate(p) => Response::from_summary(&validate(&p.a, &p.b, p.pivot)),

        Request::Jacobi(p)           => stationary(IterativeMethod::Jacobi, p),
        Request::GaussSeidel(p)      => stationary(IterativeMethod::GaussSeidel, p),
        Request::Sor(p)              => stationary(IterativeMethod::Sor, p),
        Request::CompareIterative(p) => Response::from_result(compare(p)),

        Request::TaylorCos(p) => Response::from_result(expand(Series::Cos, p)),
        Request::TaylorSin(p) => Response::from_result(expand(Series::Sin, p)),
    }
}


/// Parses a JSON request, runs it, and serializes the [`Response`].
pub fn handle_json(input: &str) -> String {
    let response = match serde_json::from_str::<Request>(input) {
        Ok(request) => handle(request),
        Err(e)      => Response::failure(ApiError::from(e).to_string()),
    };
    to_json(&response)
}


pub(crate) fn to_json(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"message":"response could not be serialized: {e}","data":null}}"#)
    })
}
