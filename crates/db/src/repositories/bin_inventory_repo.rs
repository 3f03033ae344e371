//! Repository for the `bin_inventory` table.

use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::bin_inventory::{
    BinInventorySlot, CreateBinInventorySlot, UpdateBinInventorySlot,
};

/// Column list for bin_inventory queries.
const COLUMNS: &str = "id, address, coordinates, slot_type, status, last_updated";

/// Provides CRUD operations for bin inventory slots.
pub struct BinInventoryRepo;

impl BinInventoryRepo {
    /// List all bin inventory slots.
    pub async fn list(pool: &PgPool) -> Result<Vec<BinInventorySlot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bin_inventory");
        sqlx::query_as::<_, BinInventorySlot>(&query)
            .fetch_all(pool)
            .await
    }

    /// Create a new bin inventory slot, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBinInventorySlot,
    ) -> Result<BinInventorySlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO bin_inventory (address, coordinates, slot_type, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BinInventorySlot>(&query)
            .bind(&input.address)
            .bind(&input.coordinates)
            .bind(input.slot_type)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Update a bin inventory slot by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBinInventorySlot,
    ) -> Result<Option<BinInventorySlot>, sqlx::Error> {
        let query = format!(
            "UPDATE bin_inventory SET
                address = COALESCE($2, address),
                coordinates = COALESCE($3, coordinates),
                slot_type = COALESCE($4, slot_type),
                status = COALESCE($5, status),
                last_updated = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BinInventorySlot>(&query)
            .bind(id)
            .bind(&input.address)
            .bind(&input.coordinates)
            .bind(input.slot_type)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bin inventory slot by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bin_inventory WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
