//! Collection schedule model.

use chrono::{NaiveDate, NaiveTime};
use ecobin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::WasteType;

/// A row from the `schedules` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: DbId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub waste_type: WasteType,
}

/// DTO for creating a schedule entry.
///
/// `waste_type` is optional at the transport layer so a missing value is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedule {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub waste_type: Option<WasteType>,
}

/// DTO for updating a schedule entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchedule {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub waste_type: Option<WasteType>,
}
