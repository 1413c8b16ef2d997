// src/config.rs
use std::net::IpAddr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::dtos::product::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgrest,
    Memory,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
    pub schema: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub audience: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub backend: StoreBackend,
    pub supabase: Option<SupabaseConfig>,
    pub jwt: JwtConfig,
    pub projection: Projection,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match var("HOST") {
            Some(h) => h.parse::<IpAddr>().context("HOST must be an IP address")?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().context("PORT must be a valid u16 integer")?,
            None => 3000,
        };

        let backend_name = var("STORE_BACKEND").map(|b| b.trim().to_ascii_lowercase());
        let backend = match backend_name.as_deref() {
            None | Some("postgrest") => StoreBackend::Postgrest,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(anyhow!("STORE_BACKEND must be 'postgrest' or 'memory', got '{}'", other));
            }
        };

        let supabase = match backend {
            StoreBackend::Memory => None,
            StoreBackend::Postgrest => {
                let url = var("SUPABASE_URL").context("Missing environment variable: SUPABASE_URL")?;
                let key = var("SUPABASE_KEY").context("Missing environment variable: SUPABASE_KEY")?;
                let schema = var("SUPABASE_SCHEMA").unwrap_or_else(|| "public".to_string());
                let timeout_secs = match var("STORE_TIMEOUT_SECS") {
                    Some(t) => t.parse::<u64>().context("STORE_TIMEOUT_SECS must be a whole number of seconds")?,
                    None => 10,
                };
                Some(SupabaseConfig {
                    url,
                    key,
                    schema,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
        };

        let jwt = JwtConfig {
            secret: var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?,
            audience: var("JWT_AUDIENCE"),
        };

        let projection = match var("PRODUCT_PROJECTION") {
            Some(p) => p.parse::<Projection>().map_err(|e| anyhow!(e))?,
            None => Projection::Full,
        };

        let cors_allowed_origin =
            var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:4200".to_string());

        Ok(Self {
            host,
            port,
            backend,
            supabase,
            jwt,
            projection,
            cors_allowed_origin,
        })
    }
}
