//! Prometheus metrics for page renders.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

pub const PAGE_RENDERS_TOTAL: &str = "web_page_renders_total";
pub const UPSTREAM_FAILURES_TOTAL: &str = "web_upstream_failures_total";
pub const PAGE_RENDER_DURATION_SECONDS: &str = "web_page_render_duration_seconds";

/// Registers descriptions for every metric the web server emits.
pub fn describe() {
    metrics::describe_counter!(PAGE_RENDERS_TOTAL, "Pages rendered successfully");
    metrics::describe_counter!(
        UPSTREAM_FAILURES_TOTAL,
        "Page renders aborted because the health request failed"
    );
    metrics::describe_histogram!(
        PAGE_RENDER_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Time spent fetching and rendering the home page"
    );
}

/// GET /metrics — returns Prometheus-formatted metrics.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}
