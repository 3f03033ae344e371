//! Bin inventory slot model.
//!
//! The legacy integer-coded bin table: `slot_type` and `status` are plain
//! integer codes maintained by the admin frontend, unlike the typed
//! enumerations on [`super::bin_location::BinLocation`].

use ecobin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bin_inventory` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BinInventorySlot {
    pub id: DbId,
    pub address: String,
    pub coordinates: String,
    pub slot_type: i32,
    pub status: i32,
    pub last_updated: Timestamp,
}

/// DTO for creating a bin inventory slot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBinInventorySlot {
    pub address: String,
    pub coordinates: String,
    pub slot_type: i32,
    pub status: i32,
}

/// DTO for updating a bin inventory slot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBinInventorySlot {
    pub address: Option<String>,
    pub coordinates: Option<String>,
    pub slot_type: Option<i32>,
    pub status: Option<i32>,
}
