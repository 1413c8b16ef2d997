// src/state.rs
use std::sync::Arc;

use crate::config::JwtConfig;
use crate::dtos::product::Projection;
use crate::services::{AdminProductService, CatalogService, RoleResolver};
use crate::store::{ProductStore, RoleStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub admin_products: AdminProductService,
    pub roles: RoleResolver,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    /// Wires every service to one backend that serves both tables.
    pub fn new<S>(store: Arc<S>, jwt: JwtConfig, projection: Projection) -> Self
    where
        S: ProductStore + RoleStore + 'static,
    {
        Self::from_parts(store.clone(), store, jwt, projection)
    }

    pub fn from_parts(
        products: Arc<dyn ProductStore>,
        roles: Arc<dyn RoleStore>,
        jwt: JwtConfig,
        projection: Projection,
    ) -> Self {
        Self {
            catalog: CatalogService::new(products.clone(), projection),
            admin_products: AdminProductService::new(products, projection),
            roles: RoleResolver::new(roles),
            jwt: Arc::new(jwt),
        }
    }
}
