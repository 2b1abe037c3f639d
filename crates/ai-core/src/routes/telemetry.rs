//! Device telemetry endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use chrono::Utc;

use crate::AppState;
use crate::auth::authorize;
use crate::error::ApiError;
use crate::models::{TelemetryReq, TelemetryRes};
use crate::telemetry::collect_telemetry_by_name;

/// POST /telemetry — latest reading for a device over the requested protocol.
#[tracing::instrument(skip_all)]
pub async fn collect(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<TelemetryReq>, JsonRejection>,
) -> Result<Json<TelemetryRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;

    let data = collect_telemetry_by_name(&req.device_id, &req.protocol)?;
    Ok(Json(TelemetryRes {
        timestamp: Utc::now(),
        data,
    }))
}
