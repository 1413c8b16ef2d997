// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use catalog_api::config::{Config, StoreBackend};
use catalog_api::store::{InMemoryStore, PostgrestStore};
use catalog_api::{app, telemetry, AppState};
use dotenvy::dotenv;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Create application state
    let app_state = match config.backend {
        StoreBackend::Postgrest => {
            let supabase = config
                .supabase
                .as_ref()
                .context("Supabase settings are required for the postgrest backend")?;
            let store = PostgrestStore::new(supabase)?;
            tracing::info!(url = %supabase.url, schema = %supabase.schema, "Using PostgREST store");
            AppState::new(Arc::new(store), config.jwt.clone(), config.projection)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            AppState::new(Arc::new(InMemoryStore::new()), config.jwt.clone(), config.projection)
        }
    };
    tracing::info!(projection = ?config.projection, "Product projection");

    let app = app::build_router(app_state).layer(app::cors_layer(&config.cors_allowed_origin)?);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        let (listener, addr) = bound.with_context(|| {
            format!("Failed to bind to any port starting at {} on {}", config.port, config.host)
        })?;
        tracing::info!("Server running on {}", addr);
        listener
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
