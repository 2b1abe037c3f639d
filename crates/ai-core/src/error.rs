//! API error types with HTTP response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::telemetry::TelemetryError;

/// API-level error type that maps to HTTP responses.
///
/// Bodies have the shape `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// No usable bearer credentials.
    Unauthorized(String),
    /// Credentials present but not accepted.
    Forbidden(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Request body missing, malformed or not matching the expected model.
    Unprocessable(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "detail": detail });
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        match err {
            TelemetryError::UnsupportedProtocol(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}
