pub mod admin;
pub mod products;

use axum::Router;
use crate::state::AppState;

pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(admin::routes(state))
}
