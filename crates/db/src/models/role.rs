//! Role model. Roles are keyed by name, not by a surrogate id.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `roles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_name: String,
    pub role_description: Option<String>,
}

/// DTO for creating a role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRole {
    pub role_name: String,
    pub role_description: Option<String>,
}
