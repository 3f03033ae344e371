//! Complaint model.

use ecobin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `complaints` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: DbId,
    pub name: String,
    pub complaint: String,
    /// Image URL or base64 payload, supplied by the reporter.
    pub image: Option<String>,
}

/// DTO for filing a complaint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub name: String,
    pub complaint: String,
    pub image: Option<String>,
}

/// DTO for updating a complaint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaint {
    pub name: Option<String>,
    pub complaint: Option<String>,
    pub image: Option<String>,
}
