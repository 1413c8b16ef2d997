// src/services/catalog.rs
use std::sync::Arc;

use crate::dtos::product::{ProductDto, Projection};
use crate::error::AppError;
use crate::store::ProductStore;

/// Public, read-only view of the catalog.
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
    projection: Projection,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductStore>, projection: Projection) -> Self {
        Self { products, projection }
    }

    pub async fn list_products(&self) -> Result<Vec<ProductDto>, AppError> {
        let rows = self
            .products
            .list()
            .await
            .map_err(|e| AppError::store("Failed to fetch products", e))?;

        Ok(rows
            .into_iter()
            .map(|p| ProductDto::project(p, self.projection))
            .collect())
    }

    /// `Ok(None)` when no product has this id.
    pub async fn get_product(&self, id: i64) -> Result<Option<ProductDto>, AppError> {
        let row = self
            .products
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store("Failed to fetch product", e))?;

        Ok(row.map(|p| ProductDto::project(p, self.projection)))
    }
}
