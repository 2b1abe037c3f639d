//! Health check endpoint.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "ai-core";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
}

/// GET /healthz — unauthenticated liveness probe.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
    })
}
