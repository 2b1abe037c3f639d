//! Web server entry point.

use std::sync::Arc;

use common::{LogFormat, init_tracing, shutdown_signal};
use web::{AppState, Config};

#[tokio::main]
async fn main() {
    // 1. Pick up a local .env before reading configuration
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();

    // 2. Initialize tracing
    init_tracing(&config.log_level, LogFormat::from_env());
    if dotenv.is_err() {
        tracing::debug!("no .env file found, using process environment");
    }

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");
    web::routes::metrics::describe();

    // 4. Build the application
    let state = Arc::new(AppState::new(&config.api_url).expect("failed to build HTTP client"));
    let app = web::create_app(state, metrics_handle);

    // 5. Start server
    let addr = config.addr();
    tracing::info!(%addr, health_url = %config.health_url(), "starting web server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(web::routes::health::SERVICE_NAME))
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
