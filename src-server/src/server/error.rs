//! HTTP error mapping.
//!
//! Storage faults become a bare 500 with no body; details only go to the log.
//! Malformed JSON bodies are answered with axum's own 4xx rejection.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::DomainError;

/// Error returned by todo handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] DomainError),
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Storage(source) => {
                tracing::error!(error = %source, "Storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "Rejected request body");
                rejection.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_is_bare_500() {
        let err = ApiError::from(DomainError::Storage(rusqlite::Error::InvalidQuery));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(axum::http::header::CONTENT_TYPE).is_none());
    }
}
