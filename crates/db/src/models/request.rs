//! Pickup request model.
//!
//! The only entity with lifecycle state: `status` progresses through the
//! [`RequestStatus`] enumeration and `assigned_cleaners` is derived from
//! `number_of_cleaners` on every write.

use chrono::{NaiveDate, NaiveTime};
use ecobin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::RequestStatus;

/// A row from the `pickup_requests` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub id: DbId,
    pub requester_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub event_type: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    /// Server-assigned creation timestamp, immutable after insert.
    pub request_date: Timestamp,
    pub status: RequestStatus,
    pub number_of_cleaners: i32,
    /// Derived: one generated name per requested cleaner.
    pub assigned_cleaners: Vec<String>,
    pub estimated_duration: Option<f64>,
}

/// DTO for creating a new pickup request.
///
/// Missing event date/time default to the current server date/time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub requester_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub event_type: String,
    pub location: String,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub number_of_cleaners: Option<i32>,
    pub estimated_duration: Option<f64>,
}

/// DTO for the full field update. Replaces every listed field; `id`,
/// `status`, and `request_date` are deliberately absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub requester_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub event_type: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub number_of_cleaners: Option<i32>,
    pub estimated_duration: Option<f64>,
}

/// DTO for the status-only update. `status` is optional at the transport
/// layer so a null body field surfaces as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    pub status: Option<RequestStatus>,
}
