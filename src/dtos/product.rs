// src/dtos/product.rs
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductChanges};

/// Body of `POST /admin/product` and `PUT /admin/product/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name required"));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::validation("price must be non-negative"));
        }
        Ok(())
    }

    pub fn into_new_product(self, now: DateTime<Utc>) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_changes(self, updated_at: DateTime<Utc>) -> ProductChanges {
        ProductChanges {
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            updated_at,
        }
    }
}

/// Which product columns are exposed to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// Everything, including `stockQuantity` and `category`.
    #[default]
    Full,
    /// Omits `stockQuantity` and `category`.
    Minimal,
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Projection::Full),
            "minimal" => Ok(Projection::Minimal),
            other => Err(format!("unknown product projection '{other}', expected 'full' or 'minimal'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn project(product: Product, projection: Projection) -> Self {
        let (stock_quantity, category) = match projection {
            Projection::Full => (product.stock_quantity, product.category),
            Projection::Minimal => (None, None),
        };

        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity,
            image_url: product.image_url,
            category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: 5,
            name: "Widget".into(),
            description: Some("A widget".into()),
            price: Decimal::new(999, 2),
            stock_quantity: Some(12),
            image_url: None,
            category: Some("tools".into()),
            created_at: now,
            updated_at: now,
        }
    }

    fn request(name: &str, price: Decimal) -> ProductRequest {
        ProductRequest { name: name.into(), description: None, price, image_url: None }
    }

    #[test]
    fn full_projection_keeps_stock_and_category() {
        let body = serde_json::to_value(ProductDto::project(product(), Projection::Full)).unwrap();
        assert_eq!(body["stockQuantity"], json!(12));
        assert_eq!(body["category"], json!("tools"));
        assert_eq!(body["price"], json!(9.99));
        assert!(body.get("createdAt").is_some());
    }

    #[test]
    fn minimal_projection_drops_stock_and_category() {
        let body = serde_json::to_value(ProductDto::project(product(), Projection::Minimal)).unwrap();
        assert!(body.get("stockQuantity").is_none());
        assert!(body.get("category").is_none());
        assert_eq!(body["name"], json!("Widget"));
    }

    #[test]
    fn projection_parses_case_insensitively() {
        assert_eq!("FULL".parse::<Projection>().unwrap(), Projection::Full);
        assert_eq!(" minimal".parse::<Projection>().unwrap(), Projection::Minimal);
        assert!("everything".parse::<Projection>().is_err());
    }

    #[test]
    fn rejects_blank_name() {
        let err = request("   ", Decimal::ONE).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "name required"));
    }

    #[test]
    fn rejects_negative_price() {
        let err = request("Widget", Decimal::new(-1, 2)).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "price must be non-negative"));
    }

    #[test]
    fn accepts_free_products() {
        assert!(request("Sample", Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn request_uses_camel_case() {
        let req: ProductRequest = serde_json::from_value(json!({
            "name": "Widget",
            "price": 9.99,
            "imageUrl": "https://cdn.example.com/w.png"
        }))
        .unwrap();
        assert_eq!(req.image_url.as_deref(), Some("https://cdn.example.com/w.png"));
        assert_eq!(req.description, None);
    }

    #[test]
    fn new_product_stamps_both_timestamps() {
        let now = Utc::now();
        let row = request("Widget", Decimal::ONE).into_new_product(now);
        assert_eq!(row.name, "Widget");
        assert_eq!(row.created_at, now);
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn name_is_stored_as_sent() {
        let req = request("  Widget ", Decimal::ONE);
        assert!(req.validate().is_ok());
        assert_eq!(req.clone().into_new_product(Utc::now()).name, "  Widget ");
        assert_eq!(req.into_changes(Utc::now()).name, "  Widget ");
    }
}
