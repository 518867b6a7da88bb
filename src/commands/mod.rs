//! Backend HTTP Wrappers
//!
//! Frontend bindings to the todo API, one async fn per endpoint.

mod todo;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub use todo::*;

/// API origin, fixed at build time via `TODO_API_BASE_URL`
pub const API_BASE_URL: &str = match option_env!("TODO_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Failure talking to the backend (transport, HTTP status, or body decode)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn item_endpoint(base: &str, id: &str) -> String {
    endpoint(base, &format!("/api/v1/item/{}", utf8_percent_encode(id, PATH_SEGMENT)))
}
