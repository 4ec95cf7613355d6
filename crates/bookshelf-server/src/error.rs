//! # HTTP Errors
//!
//! Renders failed operations as the uniform error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use bookshelf_core::{ErrorKind, ErrorResponse, OperationError};

/// A failed operation on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub OperationError);

impl From<OperationError> for ApiError {
    fn from(err: OperationError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind
pub fn status_code(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Envelope response for a bare error kind
pub fn envelope(kind: ErrorKind) -> Response {
    (status_code(kind), Json(ErrorResponse::from(kind))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause stays in the logs
        warn!("{}", self.0);
        envelope(self.0.kind)
    }
}
