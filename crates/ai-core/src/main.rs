//! AI-Core server entry point.

use std::sync::Arc;

use ai_core::{AppState, Config};
use common::{LogFormat, init_tracing, shutdown_signal};

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();

    init_tracing(&config.log_level, LogFormat::from_env());
    if dotenv.is_err() {
        tracing::debug!("no .env file found, using process environment");
    }
    if config.dev_token == ai_core::config::DEFAULT_DEV_TOKEN {
        tracing::warn!("AI_DEV_JWT not set, accepting the default development token");
    }

    let app = ai_core::create_app(Arc::new(AppState::new(config.dev_token.clone())));

    let addr = config.addr();
    tracing::info!(%addr, "starting AI-Core server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ai_core::routes::health::SERVICE_NAME))
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
