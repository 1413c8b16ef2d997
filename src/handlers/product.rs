// src/handlers/product.rs
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::instrument;

use crate::dtos::product::ProductDto;
use crate::error::AppError;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, AppError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

// GET /products/{id} - Get single product
#[instrument(skip(state, id))]
pub async fn get_product(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<ProductDto>, AppError> {
    let Path(id) = id.map_err(|e| AppError::validation(e.body_text()))?;

    state
        .catalog
        .get_product(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Product not found"))
}
