// src/handlers/admin_product.rs
//
// Every handler here resolves the admin role before it looks at the body or
// the product id, so non-admins get 403 whatever they send.
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    Extension, Json,
};
use tracing::instrument;

use crate::auth::Identity;
use crate::dtos::product::{ProductDto, ProductRequest};
use crate::error::AppError;
use crate::state::AppState;

// POST /admin/product - Create new product
#[instrument(skip_all, fields(user_id = %identity))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductDto>), AppError> {
    let grant = state.roles.authorize(&identity).await?;
    let Json(request) = payload?;

    let product = state.admin_products.create_product(&grant, request).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(product)))
}

// PUT /admin/product/{id} - Update product
#[instrument(skip_all, fields(user_id = %identity))]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductDto>, AppError> {
    let grant = state.roles.authorize(&identity).await?;
    let Path(id) = id.map_err(|e| AppError::validation(e.body_text()))?;
    let Json(request) = payload?;

    let product = state.admin_products.update_product(&grant, id, request).await?;
    Ok(Json(product))
}
