// File: services/reservify_backend/src/main.rs
use reservify_backend::build_router;
use reservify_common::{config_error, init_from_config, log_result, Context, ReservifyError};
use reservify_config::{load_config, BusinessRegistry};
use reservify_gcal::GoogleGatewayProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), ReservifyError> {
    let config = load_config().map_err(config_error)?;
    init_from_config(&config.logging);

    // Businesses with bad credentials are skipped; the server still starts
    let registry = Arc::new(BusinessRegistry::from_settings(&config.businesses));
    if registry.is_empty() {
        warn!("No business is configured; every reservation will be answered with 'Business not found.'");
    }
    let gateways = Arc::new(GoogleGatewayProvider::connect(&registry).await);
    info!(
        "Calendar clients ready for {} of {} business(es)",
        gateways.len(),
        registry.len()
    );

    let app = build_router(&config, registry, gateways);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);

    log_result(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error"),
        "Server shut down",
        "Server stopped",
    )
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
