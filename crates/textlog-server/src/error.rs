// ABOUTME: Per-request error type for the textlog API and its mapping to HTTP responses.
// ABOUTME: Client errors become 4xx; storage failures are logged and returned as a plain 500.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use textlog_store::StoreError;
use thiserror::Error;

/// Errors a request handler can produce. Every variant is turned into a
/// status code and a plain-text body; none of them reach the server loop.
#[derive(Debug, Error)]
pub enum LogError {
    /// The request body could not be read.
    #[error("Failed to read request body")]
    UnreadableBody(#[source] BytesRejection),

    /// The record was empty after trimming whitespace.
    #[error("No data received")]
    InvalidInput,

    /// The route exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The log file could not be opened, read, or written.
    #[error("Internal server error")]
    Storage(#[source] StoreError),
}

impl LogError {
    pub fn status(&self) -> StatusCode {
        match self {
            LogError::UnreadableBody(_) | LogError::InvalidInput => StatusCode::BAD_REQUEST,
            LogError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            LogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for LogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyRecord => LogError::InvalidInput,
            other => LogError::Storage(other),
        }
    }
}

impl IntoResponse for LogError {
    fn into_response(self) -> Response {
        match &self {
            LogError::Storage(cause) => tracing::error!("storage failure: {}", cause),
            LogError::UnreadableBody(cause) => tracing::warn!("unreadable request body: {}", cause),
            LogError::InvalidInput | LogError::MethodNotAllowed => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}
