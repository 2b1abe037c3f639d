//! The home page: API health rendered as HTML.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::Html;

use crate::client::HealthClient;
use crate::error::Result;
use crate::render::render_page;
use crate::routes::metrics::{
    PAGE_RENDER_DURATION_SECONDS, PAGE_RENDERS_TOTAL, UPSTREAM_FAILURES_TOTAL,
};

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub health: HealthClient,
}

impl AppState {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            health: HealthClient::new(api_url)?,
        })
    }
}

/// Fetches the health payload and renders the full page.
///
/// One outbound request per call; nothing is cached between renders.
pub async fn render_home(state: &AppState) -> Result<String> {
    let started = Instant::now();

    let payload = state.health.fetch().await.inspect_err(|_| {
        metrics::counter!(UPSTREAM_FAILURES_TOTAL).increment(1);
    })?;
    let html = render_page(&payload)?;

    metrics::counter!(PAGE_RENDERS_TOTAL).increment(1);
    metrics::histogram!(PAGE_RENDER_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
    Ok(html)
}

/// GET / — renders the home page.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let html = render_home(&state).await?;
    Ok(Html(html))
}
