//! Application error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Error type for request handlers.
///
/// Validation failures are not errors: handlers render them back into the
/// form. This type covers the failures that terminate a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store operation failed and was not swallowed by the caller.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}
