//! Network automation endpoints: config parsing, explanations, diagrams,
//! change planning and validation.
//!
//! All of these require a valid bearer token and currently answer with fixed,
//! schema-valid placeholder results.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use serde_json::json;

use crate::AppState;
use crate::auth::authorize;
use crate::error::ApiError;
use crate::models::{
    Confidence, DiagramReq, DiagramRes, ExplainReq, ExplainRes, NormalizedConfig, ParseConfigReq,
    ParseConfigRes, PlanChangesReq, PlanChangesRes, ValidateReq, ValidateRes,
};

const PLACEHOLDER_CONFIDENCE: f64 = 0.75;
const EMPTY_DRAWIO: &str = r#"{"mxfile":{"diagram":[]}}"#;

/// POST /parse-config — normalize a raw device configuration.
#[tracing::instrument(skip_all)]
pub async fn parse_config(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ParseConfigReq>, JsonRejection>,
) -> Result<Json<ParseConfigRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;
    tracing::debug!(device_id = %req.device_id, vendor = req.vendor.as_str(), "parsing config");

    let confidence = Confidence::new(PLACEHOLDER_CONFIDENCE)
        .ok_or_else(|| ApiError::Internal("confidence out of range".to_string()))?;

    let normalized = NormalizedConfig {
        meta: json!({ "vendor": req.vendor.as_str() }),
        ..NormalizedConfig::default()
    };

    Ok(Json(ParseConfigRes {
        normalized,
        confidence,
        warnings: Vec::new(),
    }))
}

/// POST /explain-setup — human-readable summary of a site's topology.
#[tracing::instrument(skip_all)]
pub async fn explain_setup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ExplainReq>, JsonRejection>,
) -> Result<Json<ExplainRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;
    tracing::debug!(site_id = %req.site_id, "explaining setup");

    let highlight = HashMap::from([
        ("text".to_string(), "VLAN 20".to_string()),
        ("type".to_string(), "vlan".to_string()),
        ("ref".to_string(), "vlan:20".to_string()),
    ]);

    Ok(Json(ExplainRes {
        markdown: "**Core → Access**. VLAN **20** trunked.".to_string(),
        highlights: vec![highlight],
    }))
}

/// POST /generate-diagram — topology diagram in the requested format.
#[tracing::instrument(skip_all)]
pub async fn generate_diagram(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<DiagramReq>, JsonRejection>,
) -> Result<Json<DiagramRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;
    tracing::debug!(site_id = %req.site_id, format = ?req.format, "generating diagram");

    Ok(Json(DiagramRes {
        format: req.format,
        data: EMPTY_DRAWIO.to_string(),
    }))
}

/// POST /plan-changes — per-device commands implementing an intent, with a dry run.
#[tracing::instrument(skip_all)]
pub async fn plan_changes(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<PlanChangesReq>, JsonRejection>,
) -> Result<Json<PlanChangesRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;
    tracing::debug!(site_id = %req.site_id, intent = %req.intent, "planning changes");

    Ok(Json(PlanChangesRes {
        diff: vec![json!({
            "deviceId": "dev1",
            "method": "cli",
            "commands": ["conf t", "vlan 20"],
        })],
        dry_run: json!({ "passed": true, "notes": [] }),
        blast_radius: Vec::new(),
    }))
}

/// POST /validate — topology checks for a site.
#[tracing::instrument(skip_all)]
pub async fn validate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ValidateReq>, JsonRejection>,
) -> Result<Json<ValidateRes>, ApiError> {
    let req = authorize(&state, &headers, body)?;
    tracing::debug!(site_id = %req.site_id, "validating site");

    Ok(Json(ValidateRes {
        ok: true,
        errors: Vec::new(),
        metrics: HashMap::from([("topology_valid".to_string(), 1.0)]),
    }))
}
