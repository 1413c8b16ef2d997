// src/store/postgrest.rs
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::SupabaseConfig;
use crate::models::product::{NewProduct, Product, ProductChanges};
use crate::models::user_role::UserRole;
use crate::store::{ProductStore, RoleStore, StoreError, StoreResult};

const PRODUCTS: &str = "products";
const USER_ROLES: &str = "user_roles";

/// PostgREST client for a Supabase project.
///
/// Every request carries the project key both as `apikey` and as bearer
/// token. Writes ask for `return=representation` so the stored row (with its
/// generated id and timestamps) comes back in the same round trip.
#[derive(Clone)]
pub struct PostgrestStore {
    client: Client,
    rest_url: String,
}

impl PostgrestStore {
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let key = HeaderValue::from_str(&config.key).context("SUPABASE_KEY is not a valid header value")?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .context("SUPABASE_KEY is not a valid header value")?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if config.schema != "public" {
            let schema = HeaderValue::from_str(&config.schema).context("SUPABASE_SCHEMA is not a valid header value")?;
            headers.insert("Accept-Profile", schema.clone());
            headers.insert("Content-Profile", schema);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build store HTTP client")?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
        })
    }

    fn table(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    async fn rows<T: DeserializeOwned>(response: Response) -> StoreResult<Vec<T>> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16(), body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductStore for PostgrestStore {
    #[instrument(skip(self))]
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let response = self
            .client
            .get(self.table(PRODUCTS))
            .query(&[("select", "*")])
            .send()
            .await?;
        Self::rows(response).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let filter = format!("eq.{id}");
        let response = self
            .client
            .get(self.table(PRODUCTS))
            .query(&[("select", "*"), ("id", filter.as_str())])
            .send()
            .await?;
        Ok(Self::rows(response).await?.into_iter().next())
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        let response = self
            .client
            .post(self.table(PRODUCTS))
            .header("Prefer", "return=representation")
            .json(&product)
            .send()
            .await?;
        let created = Self::rows::<Product>(response)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::EmptyResponse("insert into products"))?;
        debug!(id = created.id, "Inserted product row");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: ProductChanges) -> StoreResult<Option<Product>> {
        let filter = format!("eq.{id}");
        let response = self
            .client
            .patch(self.table(PRODUCTS))
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation")
            .json(&changes)
            .send()
            .await?;
        Ok(Self::rows(response).await?.into_iter().next())
    }
}

#[async_trait]
impl RoleStore for PostgrestStore {
    #[instrument(skip(self))]
    async fn roles_for(&self, user_id: Uuid) -> StoreResult<Vec<UserRole>> {
        let filter = format!("eq.{user_id}");
        let response = self
            .client
            .get(self.table(USER_ROLES))
            .query(&[("select", "*"), ("user_id", filter.as_str())])
            .send()
            .await?;
        Self::rows(response).await
    }
}
