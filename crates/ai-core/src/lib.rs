//! AirGuard AI-Core API.
//!
//! JSON endpoints used by the AirGuard web app: a `/healthz` probe plus
//! token-protected config parsing, setup explanation, diagram generation,
//! change planning, validation and device telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bearer token accepted on authenticated routes.
    pub dev_token: String,
}

impl AppState {
    pub fn new(dev_token: impl Into<String>) -> Self {
        Self {
            dev_token: dev_token.into(),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(routes::health::check))
        .route("/parse-config", post(routes::automation::parse_config))
        .route("/explain-setup", post(routes::automation::explain_setup))
        .route("/generate-diagram", post(routes::automation::generate_diagram))
        .route("/plan-changes", post(routes::automation::plan_changes))
        .route("/validate", post(routes::automation::validate))
        .route("/telemetry", post(routes::telemetry::collect))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
