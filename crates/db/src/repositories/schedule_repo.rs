//! Repository for the `schedules` table.

use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};
use crate::models::status::WasteType;

/// Column list for schedules queries.
const COLUMNS: &str = "id, date, time, location, waste_type";

/// Provides CRUD operations for collection schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// List all schedule entries.
    pub async fn list(pool: &PgPool) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules");
        sqlx::query_as::<_, Schedule>(&query).fetch_all(pool).await
    }

    /// Create a new schedule entry, returning the created row.
    ///
    /// The waste type is validated as present at the handler layer.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSchedule,
        waste_type: WasteType,
    ) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules (date, time, location, waste_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(waste_type)
            .fetch_one(pool)
            .await
    }

    /// Update a schedule entry by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                date = COALESCE($2, date),
                time = COALESCE($3, time),
                location = COALESCE($4, location),
                waste_type = COALESCE($5, waste_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(input.waste_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
