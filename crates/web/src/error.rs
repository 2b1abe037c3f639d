//! Page render errors with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors that abort a page render.
///
/// No partial page is ever produced: any of these turns into an error response.
#[derive(Debug, Error)]
pub enum WebError {
    /// The health request failed: connection error, non-success status, or a body that is not JSON.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The fetched payload could not be serialized back to text.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for render results.
pub type Result<T> = std::result::Result<T, WebError>;

impl WebError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
            WebError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, status = status.as_u16(), "page render failed");

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>{code} {reason}</title></head>\
             <body><h1>{code} {reason}</h1></body></html>\n",
            code = status.as_u16(),
        );
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_maps_to_internal_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WebError::from(err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn error_response_has_no_payload_content() {
        let err = WebError::from(serde_json::from_str::<serde_json::Value>("nope").unwrap_err());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
