// src/services/admin_product.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::dtos::product::{ProductDto, ProductRequest, Projection};
use crate::error::AppError;
use crate::services::role::AdminGrant;
use crate::store::ProductStore;

/// Create and update for admins. Each call needs an [`AdminGrant`].
#[derive(Clone)]
pub struct AdminProductService {
    products: Arc<dyn ProductStore>,
    projection: Projection,
}

impl AdminProductService {
    pub fn new(products: Arc<dyn ProductStore>, projection: Projection) -> Self {
        Self { products, projection }
    }

    pub async fn create_product(&self, grant: &AdminGrant, request: ProductRequest) -> Result<ProductDto, AppError> {
        request.validate()?;

        let row = request.into_new_product(Utc::now());
        let created = self
            .products
            .insert(row)
            .await
            .map_err(|e| AppError::store("Failed to create product", e))?;

        info!(product_id = created.id, admin = %grant.identity(), "Product created");
        Ok(ProductDto::project(created, self.projection))
    }

    pub async fn update_product(
        &self,
        grant: &AdminGrant,
        id: i64,
        request: ProductRequest,
    ) -> Result<ProductDto, AppError> {
        request.validate()?;

        let existing = self
            .products
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store("Failed to update product", e))?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        // Never let updated_at move backwards, even if the clock does.
        let updated_at = Utc::now().max(existing.updated_at);
        let updated = self
            .products
            .update(id, request.into_changes(updated_at))
            .await
            .map_err(|e| AppError::store("Failed to update product", e))?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        info!(product_id = id, admin = %grant.identity(), "Product updated");
        Ok(ProductDto::project(updated, self.projection))
    }
}
