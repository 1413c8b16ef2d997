// src/store/memory.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::product::{NewProduct, Product, ProductChanges};
use crate::models::user_role::UserRole;
use crate::store::{ProductStore, RoleStore, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    products: BTreeMap<i64, Product>,
    user_roles: Vec<UserRole>,
}

/// In-process store (for development/testing). Ids are assigned sequentially from 1.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn grant_role(&self, user_id: Uuid, role: &str) {
        let mut tables = self.tables.write().await;
        tables.user_roles.push(UserRole { user_id, role: role.to_string() });
    }

    pub async fn product_count(&self) -> usize {
        self.tables.read().await.products.len()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        let mut tables = self.tables.write().await;
        tables.next_id += 1;
        let row = Product {
            id: tables.next_id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: Some(0),
            image_url: product.image_url,
            category: None,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        tables.products.insert(row.id, row.clone());

        tracing::info!(product_id = row.id, "Created product");
        Ok(row)
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> StoreResult<Option<Product>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.products.get_mut(&id) else {
            return Ok(None);
        };
        row.apply(changes);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(row.clone()))
    }
}

#[async_trait]
impl RoleStore for InMemoryStore {
    async fn roles_for(&self, user_id: Uuid) -> StoreResult<Vec<UserRole>> {
        let tables = self.tables.read().await;
        Ok(tables
            .user_roles
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
