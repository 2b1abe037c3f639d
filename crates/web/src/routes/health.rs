//! Liveness of the web process itself.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "airguard-web";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health — reports that the page server is up. Does not touch the API.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
