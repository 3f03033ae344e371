//! Repository for the `bin_locations` table.

use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::bin_location::{BinLocation, CreateBinLocation, UpdateBinLocation};

/// Column list for bin_locations queries.
const COLUMNS: &str = "id, address, latitude, longitude, waste_type, status, last_updated";

/// Provides CRUD operations for geo-referenced bin locations.
pub struct BinLocationRepo;

impl BinLocationRepo {
    /// List all bin locations.
    pub async fn list(pool: &PgPool) -> Result<Vec<BinLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bin_locations");
        sqlx::query_as::<_, BinLocation>(&query).fetch_all(pool).await
    }

    /// Create a new bin location, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBinLocation,
    ) -> Result<BinLocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO bin_locations (address, latitude, longitude, waste_type, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BinLocation>(&query)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.waste_type)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Update a bin location by ID, returning the updated row.
    /// `last_updated` is refreshed on every update.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBinLocation,
    ) -> Result<Option<BinLocation>, sqlx::Error> {
        let query = format!(
            "UPDATE bin_locations SET
                address = COALESCE($2, address),
                latitude = COALESCE($3, latitude),
                longitude = COALESCE($4, longitude),
                waste_type = COALESCE($5, waste_type),
                status = COALESCE($6, status),
                last_updated = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BinLocation>(&query)
            .bind(id)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.waste_type)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bin location by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bin_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
