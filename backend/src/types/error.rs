//! Universal error handling for the API

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::media_storage::StoreError;

/// API error response envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                error: ErrorBody {
                    code,
                    message: message.into(),
                },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert store errors to application errors
///
/// Store faults surface as 500s carrying the underlying error's message so
/// operators can see the cause in the response body.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        )
    }
}

/// Convert multipart read errors to application errors
impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upload_failed",
            err.to_string(),
        )
    }
}
