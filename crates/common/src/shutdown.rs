//! Graceful shutdown signal handling.

use tokio::signal;

/// Resolves once `service` receives SIGINT or SIGTERM.
pub async fn shutdown_signal(service: &'static str) {
    let interrupt = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(service, error = %err, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(service, error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(service, signal = signal_name, "shutdown requested, draining connections");
}
