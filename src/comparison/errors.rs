use thiserror::Error;

use crate::linear_systems::IterativeError;
use crate::root_finding::errors::{RootFindingError, ToleranceError};


#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("no method could run: {hint}")]
    NothingToCompare { hint: &'static str },

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Iterative(#[from] IterativeError),
}
