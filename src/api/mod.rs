//! Request / response boundary.
//!
//! ┌ [`request`] : numeric-only operations, `{"method": ..., "params": {...}}`
//! └ [`roots`]   : root finding, with caller-supplied [`Functions`]
//!
//! Every call yields a [`Response`]; input errors become `success = false`
//! with the error text as message, never a panic.

pub mod errors;
pub mod request;
pub mod response;
pub mod roots;

pub use errors::ApiError;
pub use request::{handle, handle_json, Request};
pub use response::Response;
pub use roots::{handle_roots, handle_roots_json, Functions, RootRequest};
