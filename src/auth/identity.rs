use std::fmt;

use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::error::AppError;

/// Authenticated subject of a request.
///
/// Built only from verified claims, then handed explicitly to the services
/// that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity(Uuid);

impl Identity {
    pub fn new(user_id: Uuid) -> Self {
        Self(user_id)
    }

    pub fn user_id(&self) -> Uuid {
        self.0
    }

    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        claims
            .sub
            .as_deref()
            .map(str::trim)
            .filter(|sub| !sub.is_empty())
            .and_then(|sub| Uuid::parse_str(sub).ok())
            .map(Self)
            .ok_or_else(|| AppError::unauthorized("User ID not found in token"))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
