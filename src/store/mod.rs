//! Data access for the catalog.
//!
//! The services only see [`ProductStore`] and [`RoleStore`]. Two backends
//! implement them: [`PostgrestStore`] talks to the Supabase REST endpoint,
//! [`InMemoryStore`] keeps rows in process for local runs and tests.

pub mod memory;
pub mod postgrest;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::product::{NewProduct, Product, ProductChanges};
use crate::models::user_role::UserRole;

pub use memory::InMemoryStore;
pub use postgrest::PostgrestStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store returned no rows for {0}")]
    EmptyResponse(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, in the order the store returns them.
    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Inserts and returns the stored row, including the assigned id.
    async fn insert(&self, product: NewProduct) -> StoreResult<Product>;

    /// Returns `None` when no row has this id.
    async fn update(&self, id: i64, changes: ProductChanges) -> StoreResult<Option<Product>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn roles_for(&self, user_id: Uuid) -> StoreResult<Vec<UserRole>>;
}
