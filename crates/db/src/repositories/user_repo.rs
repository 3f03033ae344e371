//! Repository for the `users` table.
//!
//! Email uniqueness is enforced by the `uq_users_email` constraint at the
//! storage layer; violations surface as a conflict at the HTTP boundary.

use sqlx::PgPool;

use crate::models::user::{NewUser, User};

/// Column list for users queries.
const COLUMNS: &str =
    "id, first_name, last_name, contact_number, email, password_hash, active, role_name";

/// Provides account operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Find a user by email address.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user with an already-hashed password, returning the
    /// created row. New accounts start active.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users
                (first_name, last_name, contact_number, email, password_hash, active, role_name)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.contact_number)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role_name)
            .fetch_one(pool)
            .await
    }
}
