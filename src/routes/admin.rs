use axum::{middleware, routing::{post, put}, Router};
use crate::handlers::admin_product::{create_product, update_product};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

// Product deletion is deliberately not routed; DELETE on these paths gets 405.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/product", post(create_product))
        .route("/admin/product/{id}", put(update_product))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
