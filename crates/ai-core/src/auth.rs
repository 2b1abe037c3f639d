//! Bearer-token authentication for the automation routes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::AppState;
use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Checks an `Authorization` header value against the expected token.
pub fn check_auth(authorization: Option<&str>, expected_token: &str) -> Result<(), ApiError> {
    let token = authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| ApiError::Unauthorized("Missing auth".to_string()))?;

    if token != expected_token {
        return Err(ApiError::Forbidden("Invalid token".to_string()));
    }
    Ok(())
}

/// Validates the request body, then the bearer token, in that order.
///
/// A malformed body is reported (422) even when credentials are missing.
pub fn authorize<T>(
    state: &AppState,
    headers: &HeaderMap,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(payload) = body?;

    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    check_auth(header, &state.dev_token).inspect_err(|err| {
        tracing::warn!(error = ?err, "rejected unauthenticated request");
    })?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_token() {
        assert!(check_auth(Some("Bearer dev-token"), "dev-token").is_ok());
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert!(matches!(
            check_auth(None, "dev-token"),
            Err(ApiError::Unauthorized(msg)) if msg == "Missing auth"
        ));
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        assert!(matches!(
            check_auth(Some("Basic ZGV2OnRva2Vu"), "dev-token"),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            check_auth(Some("bearer dev-token"), "dev-token"),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn wrong_token_is_forbidden() {
        assert!(matches!(
            check_auth(Some("Bearer nope"), "dev-token"),
            Err(ApiError::Forbidden(msg)) if msg == "Invalid token"
        ));
    }

    fn headers_with(auth: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth.parse().unwrap());
        headers
    }

    #[test]
    fn authorize_returns_payload_for_valid_token() {
        let state = AppState::new("dev-token");
        let payload = authorize(&state, &headers_with("Bearer dev-token"), Ok(Json(7u32)));
        assert_eq!(payload.unwrap(), 7);
    }

    #[test]
    fn authorize_rejects_wrong_token_after_body() {
        let state = AppState::new("dev-token");
        let result = authorize(&state, &headers_with("Bearer other"), Ok(Json(())));
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn authorize_without_header_is_unauthorized() {
        let state = AppState::new("dev-token");
        let result = authorize(&state, &HeaderMap::new(), Ok(Json(())));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn token_keeps_everything_after_first_space() {
        assert!(check_auth(Some("Bearer a b"), "a b").is_ok());
        assert!(matches!(
            check_auth(Some("Bearer "), "dev-token"),
            Err(ApiError::Forbidden(_))
        ));
    }
}
