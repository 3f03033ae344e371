//! Geo-referenced bin location model.

use ecobin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{BinStatus, WasteType};

/// A row from the `bin_locations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BinLocation {
    pub id: DbId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub waste_type: WasteType,
    pub status: BinStatus,
    pub last_updated: Timestamp,
}

/// DTO for creating a bin location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBinLocation {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub waste_type: WasteType,
    pub status: BinStatus,
}

/// DTO for updating a bin location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBinLocation {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub waste_type: Option<WasteType>,
    pub status: Option<BinStatus>,
}
