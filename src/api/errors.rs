use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{method} needs the function {name}")]
    MissingFunction { method: &'static str, name: &'static str },

    #[error("{method} does not take the parameter {name}")]
    UnsupportedParameter { method: &'static str, name: &'static str },
}
