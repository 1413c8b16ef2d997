use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row of the `user_roles` table. Owned by the identity provider; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: Uuid,
    pub role: String,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case("admin")
    }
}
