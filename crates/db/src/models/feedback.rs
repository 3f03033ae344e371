//! Feedback entry model.

use ecobin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `feedback` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: DbId,
    pub username: String,
    pub message: String,
    pub rating: i32,
}

/// DTO for submitting feedback.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedback {
    pub username: String,
    pub message: String,
    pub rating: i32,
}

/// DTO for updating a feedback entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedback {
    pub username: Option<String>,
    pub message: Option<String>,
    pub rating: Option<i32>,
}
