use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Informational only; admin status is looked up in `user_roles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

/// Issues a HS256 token for `user_id`. Used for local development and tests;
/// production tokens come from the identity provider.
pub fn sign_token(user_id: Uuid, config: &JwtConfig, ttl: Duration) -> Result<String, AppError> {
    sign_claims(
        &Claims {
            sub: Some(user_id.to_string()),
            exp: (Utc::now() + ttl).timestamp() as usize,
            iat: Utc::now().timestamp() as usize,
            email: None,
            role: Some("authenticated".to_string()),
            aud: config.audience.clone(),
        },
        config,
    )
}

pub fn sign_claims(claims: &Claims, config: &JwtConfig) -> Result<String, AppError> {
    encode(&Header::new(Algorithm::HS256), claims, &EncodingKey::from_secret(config.secret.as_bytes()))
        .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
}

pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    match &config.audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }

    decode::<Claims>(token, &DecodingKey::from_secret(config.secret.as_bytes()), &validation)
        .map(|d| d.claims)
        .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {e}")))
}
