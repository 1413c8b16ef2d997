// src/services/role.rs
use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::Identity;
use crate::error::AppError;
use crate::models::user_role::UserRole;
use crate::store::RoleStore;

/// Proof that an identity was confirmed as admin.
///
/// Only [`RoleResolver::authorize`] hands these out, and every write on the
/// catalog takes one, so nothing can be persisted before the role check ran.
#[derive(Debug)]
pub struct AdminGrant {
    identity: Identity,
}

impl AdminGrant {
    pub fn identity(&self) -> Identity {
        self.identity
    }
}

#[derive(Clone)]
pub struct RoleResolver {
    roles: Arc<dyn RoleStore>,
}

impl RoleResolver {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// True iff any `user_roles` row for this identity says "admin".
    ///
    /// A lookup that fails counts as "not admin".
    pub async fn is_admin(&self, identity: &Identity) -> bool {
        match self.roles.roles_for(identity.user_id()).await {
            Ok(roles) => {
                let admin = roles.iter().any(UserRole::is_admin);
                debug!(user_id = %identity, rows = roles.len(), admin, "Resolved roles");
                admin
            }
            Err(e) => {
                warn!(user_id = %identity, error = %e, "Role lookup failed, denying admin access");
                false
            }
        }
    }

    pub async fn authorize(&self, identity: &Identity) -> Result<AdminGrant, AppError> {
        if self.is_admin(identity).await {
            Ok(AdminGrant { identity: *identity })
        } else {
            Err(AppError::forbidden("Admin role required"))
        }
    }
}
