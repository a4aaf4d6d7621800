use std::net::SocketAddr;
use std::sync::Arc;

use price_feed::providers::exchange_rest::ExchangeRestProvider;
use tracing_subscriber::EnvFilter;

use aggregation_service::config::ServiceConfig;
use aggregation_service::routes;
use aggregation_service::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let source = match ExchangeRestProvider::new(
        &cfg.upstream_base_url,
        cfg.upstream_token.clone(),
    ) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::error!("Failed to initialize price source: {e}");
            std::process::exit(1);
        }
    };

    let bind = cfg.bind.clone();
    let port = cfg.port;
    let state = AppState::with_source(cfg, source);

    let app = routes::api_router().with_state(state);

    let addr: SocketAddr = match format!("{bind}:{port}").parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid bind address {bind}:{port}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Stock aggregation service listening on http://{addr}");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, gracefully stopping…");
}
