//! Repository for the `roles` table. Roles are keyed by name.

use sqlx::PgPool;

use crate::models::role::{CreateRole, Role};

/// Column list for roles queries.
const COLUMNS: &str = "role_name, role_description";

/// Provides operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY role_name ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Check whether a role with the given name exists.
    pub async fn exists(pool: &PgPool, role_name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM roles WHERE role_name = $1)")
                .bind(role_name)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Create a new role, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRole) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (role_name, role_description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(&input.role_name)
            .bind(&input.role_description)
            .fetch_one(pool)
            .await
    }
}
