//! HTTP error types.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tapd_webhook::DispatchError;
use thiserror::Error;

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type for consistent JSON error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request body was refused before decoding (too large, truncated).
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// The event was decoded but one or more listeners failed.
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::DeliveryFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));
        (status, body).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Decode(e) => ApiError::BadRequest(e.to_string()),
            e @ DispatchError::Delivery { .. } => ApiError::DeliveryFailed(e.to_string()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        let message = format!("failed to read body: {}", rejection.body_text());
        if status.is_client_error() {
            ApiError::Rejected(status, message)
        } else {
            ApiError::Internal(message)
        }
    }
}
