//! AirGuard web page server.
//!
//! Serves a single page that queries the API's `/healthz` endpoint on every
//! request and shows the JSON it returns, plus the usual liveness and
//! Prometheus endpoints for the process itself.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use client::HealthClient;
pub use config::Config;
pub use error::WebError;
pub use routes::home::{AppState, render_home};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::home::index))
        .route("/health", get(routes::health::check))
        .with_state(state)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}
