// src/app.rs
use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Full application under the `/api` base path, with request tracing.
pub fn build_router(state: AppState) -> Router {
    let api = routes::create_router(&state);

    Router::new()
        .nest("/api", api)
        .route("/", get(|| async { "Catalog API" }))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the storefront origin; any method and header.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin).context("CORS_ALLOWED_ORIGIN is not a valid origin")?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_configured_origin() {
        assert!(cors_layer("http://localhost:4200").is_ok());
    }

    #[test]
    fn cors_layer_rejects_invalid_origin() {
        let err = cors_layer("http://localhost\n:4200").unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }
}
