//! Runs every root finder whose inputs are available on one equation.
//!
//! ┌ Bisection, Regula Falsi : need a bracket `[xi, xs]`
//! ├ Fixed Point             : needs `x0` and `g`
//! ├ Newton-Raphson          : needs `x0` and `f'`
//! ├ Secant                  : needs `x0` and `x1`
//! └ Multiple Roots          : needs `x0`, `f'` and `f''`
//!
//! All share tolerance, iteration cap and error kind.

use std::collections::BTreeMap;

use tracing::instrument;

use super::errors::ComparisonError;
use super::notes::{root_notes, MethodNotes};
use super::report::{ComparisonReport, MethodEntry};
use crate::root_finding::bisection::{bisection, BisectionCfg};
use crate::root_finding::config::{impl_common_cfg, CommonCfg};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use crate::root_finding::multiple_roots::{multiple_roots, MultipleRootsCfg};
use crate::root_finding::newton::{newton, NewtonCfg};
use crate::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use crate::root_finding::secant::{secant, SecantCfg};
use crate::root_finding::{Algorithm, RootResult};


/// Newton-Raphson below this many iterations gets a quadratic-convergence note.
const NEWTON_FAST_ITERATIONS: usize = 10;
/// Bisection above this many iterations gets a linear-convergence note.
const BISECTION_SLOW_ITERATIONS: usize = 20;


/// The callables of one equation `f(x) = 0`.
///
/// - `f`   : the equation
/// - `g`   : fixed-point form `x = g(x)`
/// - `df`  : `f'`
/// - `ddf` : `f''`
#[derive(Clone, Copy)]
pub struct RootFunctions<'a> {
    pub f   : &'a dyn Fn(f64) -> f64,
    pub g   : Option<&'a dyn Fn(f64) -> f64>,
    pub df  : Option<&'a dyn Fn(f64) -> f64>,
    pub ddf : Option<&'a dyn Fn(f64) -> f64>,
}

impl<'a> RootFunctions<'a> {
    pub fn new(f: &'a dyn Fn(f64) -> f64) -> Self {
        Self { f, g: None, df: None, ddf: None }
    }

    #[must_use]
    pub fn with_g(mut self, g: &'a dyn Fn(f64) -> f64) -> Self { self.g = Some(g); self }

    #[must_use]
    pub fn with_df(mut self, df: &'a dyn Fn(f64) -> f64) -> Self { self.df = Some(df); self }

    #[must_use]
    pub fn with_ddf(mut self, ddf: &'a dyn Fn(f64) -> f64) -> Self { self.ddf = Some(ddf); self }
}


/// Shared stopping parameters and seeds.
///
/// # Defaults
///
/// ┌ tolerance  = 1e-7
/// ├ max_iter   = 100
/// ├ error_kind = absolute
/// └ bracket, x0, x1 unset
#[derive(Debug, Copy, Clone, Default)]
pub struct RootComparisonCfg {
    common  : CommonCfg,
    bracket : Option<[f64; 2]>,
    x0      : Option<f64>,
    x1      : Option<f64>,
}
impl RootComparisonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_bracket(mut self, xi: f64, xs: f64) -> Result<Self, RootFindingError> {
        if !(xi.is_finite() && xs.is_finite()) || xi >= xs {
            return Err(RootFindingError::InvalidBounds { a: xi, b: xs });
        }
        self.bracket = Some([xi, xs]);
        Ok(self)
    }

    pub fn set_x0(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() {
            return Err(RootFindingError::NonFiniteSeed { name: "x0", got: v });
        }
        self.x0 = Some(v);
        Ok(self)
    }

    pub fn set_x1(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() {
            return Err(RootFindingError::NonFiniteSeed { name: "x1", got: v });
        }
        self.x1 = Some(v);
        Ok(self)
    }

    pub fn bracket(&self) -> Option<[f64; 2]> { self.bracket }
    pub fn x0(&self) -> Option<f64> { self.x0 }
    pub fn x1(&self) -> Option<f64> { self.x1 }
}
impl_common_cfg!(RootComparisonCfg);


fn convergence_note(results: &[MethodEntry<RootResult>]) -> Option<String> {
    let converged = |alg: Algorithm| {
        results.iter().find(|e| e.success && e.method == alg.display_name())
    };
    if let Some(e) = converged(Algorithm::Newton) {
        if e.iterations < NEWTON_FAST_ITERATIONS {
            return Some(format!(
                "Newton-Raphson showed typical quadratic convergence ({} iterations).",
                e.iterations
            ));
        }
    }
    if let Some(e) = converged(Algorithm::Bisection) {
        if e.iterations > BISECTION_SLOW_ITERATIONS {
            return Some(format!(
                "Bisection needed {} iterations because its convergence is linear.",
                e.iterations
            ));
        }
    }
    None
}


/// Runs each applicable root finder on `funcs` and ranks them.
///
/// A method whose inputs are missing is skipped; one that rejects its inputs
/// is listed as a failed entry with the error as message.
///
/// # Errors
/// - [`ComparisonError::NothingToCompare`] : no method had the inputs it needs
#[instrument(skip(funcs, cfg), fields(bracket = ?cfg.bracket, x0 = ?cfg.x0, x1 = ?cfg.x1))]
pub fn compare_root_finders(
    funcs: RootFunctions<'_>,
    cfg: &RootComparisonCfg,
) -> Result<ComparisonReport<RootResult>, ComparisonError> {
    let common = *cfg.common();
    let f = funcs.f;
    let mut results = Vec::new();

    if let Some([xi, xs]) = cfg.bracket {
        results.push(MethodEntry::timed(Algorithm::Bisection.display_name(), || {
            bisection(f, xi, xs, BisectionCfg::new().with_common(common))
        }));
        results.push(MethodEntry::timed(Algorithm::RegulaFalsi.display_name(), || {
            regula_falsi(f, xi, xs, RegulaFalsiCfg::new().with_common(common))
        }));
    }
    if let (Some(x0), Some(g)) = (cfg.x0, funcs.g) {
        results.push(MethodEntry::timed(Algorithm::FixedPoint.display_name(), || {
            fixed_point(f, g, x0, FixedPointCfg::new().with_common(common))
        }));
    }
    if let (Some(x0), Some(df)) = (cfg.x0, funcs.df) {
        results.push(MethodEntry::timed(Algorithm::Newton.display_name(), || {
            newton(f, df, x0, NewtonCfg::new().with_common(common))
        }));
    }
    if let (Some(x0), Some(x1)) = (cfg.x0, cfg.x1) {
        results.push(MethodEntry::timed(Algorithm::Secant.display_name(), || {
            secant(f, x0, x1, SecantCfg::new().with_common(common))
        }));
    }
    if let (Some(x0), Some(df), Some(ddf)) = (cfg.x0, funcs.df, funcs.ddf) {
        results.push(MethodEntry::timed(Algorithm::MultipleRoots.display_name(), || {
            multiple_roots(f, df, ddf, x0, MultipleRootsCfg::new().with_common(common))
        }));
    }

    if results.is_empty() {
        return Err(ComparisonError::NothingToCompare {
            hint: "give a bracket, or x0 together with g, f', or x1",
        });
    }

    let notes: BTreeMap<String, MethodNotes> = Algorithm::ALL
        .iter()
        .filter(|alg| results.iter().any(|e| e.method == alg.display_name()))
        .map(|&alg| (alg.display_name().to_string(), root_notes(alg)))
        .collect();
    let note = convergence_note(&results);

    Ok(ComparisonReport::rank(results, notes, note))
}
