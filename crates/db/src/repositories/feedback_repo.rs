//! Repository for the `feedback` table.

use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};

/// Column list for feedback queries.
const COLUMNS: &str = "id, username, message, rating";

/// Provides CRUD operations for feedback entries.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// List all feedback entries.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    /// Create a new feedback entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedback,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (username, message, rating)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.username)
            .bind(&input.message)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Update a feedback entry by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET
                username = COALESCE($2, username),
                message = COALESCE($3, message),
                rating = COALESCE($4, rating)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.message)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feedback entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
