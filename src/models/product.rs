use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row of the `products` table as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. The store assigns `id`; stock and category keep their column defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replace of the mutable columns. `created_at` is never part of an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductChanges {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn apply(&mut self, changes: ProductChanges) {
        self.name = changes.name;
        self.description = changes.description;
        self.price = changes.price;
        self.image_url = changes.image_url;
        self.updated_at = changes.updated_at;
    }
}
