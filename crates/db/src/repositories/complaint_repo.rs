//! Repository for the `complaints` table.

use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::complaint::{Complaint, CreateComplaint, UpdateComplaint};

/// Column list for complaints queries.
const COLUMNS: &str = "id, name, complaint, image";

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// List all complaints.
    pub async fn list(pool: &PgPool) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints");
        sqlx::query_as::<_, Complaint>(&query).fetch_all(pool).await
    }

    /// Create a new complaint, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateComplaint,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (name, complaint, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.name)
            .bind(&input.complaint)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Update a complaint by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComplaint,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET
                name = COALESCE($2, name),
                complaint = COALESCE($3, complaint),
                image = COALESCE($4, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.complaint)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a complaint by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
