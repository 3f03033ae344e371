//! Repository for the `pickup_requests` table.
//!
//! The derived `assigned_cleaners` list is regenerated here on every
//! insert and field update so the stored list always matches the stored
//! cleaner count, regardless of which handler performed the write.

use ecobin_core::request::assigned_cleaners;
use ecobin_core::types::DbId;
use sqlx::PgPool;

use crate::models::request::{CreateRequest, PickupRequest, UpdateRequest};
use crate::models::status::RequestStatus;

/// Column list for pickup_requests queries.
const COLUMNS: &str = "id, requester_name, email, contact_number, event_type, location, \
                       event_date, event_time, request_date, status, number_of_cleaners, \
                       assigned_cleaners, estimated_duration";

/// Provides workflow persistence for pickup requests.
pub struct RequestRepo;

impl RequestRepo {
    /// List all pickup requests. Order is unspecified.
    pub async fn list(pool: &PgPool) -> Result<Vec<PickupRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pickup_requests");
        sqlx::query_as::<_, PickupRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a pickup request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PickupRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pickup_requests WHERE id = $1");
        sqlx::query_as::<_, PickupRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new pickup request with the given initial status.
    ///
    /// Missing event date/time fall back to the current server date/time;
    /// the request timestamp is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRequest,
        status: RequestStatus,
    ) -> Result<PickupRequest, sqlx::Error> {
        let cleaners = assigned_cleaners(input.number_of_cleaners);
        let count = input.number_of_cleaners.unwrap_or(0).max(0);

        let query = format!(
            "INSERT INTO pickup_requests
                (requester_name, email, contact_number, event_type, location,
                 event_date, event_time, status, number_of_cleaners,
                 assigned_cleaners, estimated_duration)
             VALUES ($1, $2, $3, $4, $5,
                     COALESCE($6, CURRENT_DATE), COALESCE($7, LOCALTIME),
                     $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PickupRequest>(&query)
            .bind(&input.requester_name)
            .bind(&input.email)
            .bind(&input.contact_number)
            .bind(&input.event_type)
            .bind(&input.location)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(status)
            .bind(count)
            .bind(&cleaners)
            .bind(input.estimated_duration)
            .fetch_one(pool)
            .await
    }

    /// Replace the caller-editable fields of a request, returning the
    /// updated row. `status` and `request_date` are untouched; the
    /// cleaner list is regenerated, not merged.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<PickupRequest>, sqlx::Error> {
        let cleaners = assigned_cleaners(input.number_of_cleaners);
        let count = input.number_of_cleaners.unwrap_or(0).max(0);

        let query = format!(
            "UPDATE pickup_requests SET
                requester_name = $2,
                email = $3,
                contact_number = $4,
                event_type = $5,
                location = $6,
                event_date = $7,
                event_time = $8,
                number_of_cleaners = $9,
                assigned_cleaners = $10,
                estimated_duration = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PickupRequest>(&query)
            .bind(id)
            .bind(&input.requester_name)
            .bind(&input.email)
            .bind(&input.contact_number)
            .bind(&input.event_type)
            .bind(&input.location)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(count)
            .bind(&cleaners)
            .bind(input.estimated_duration)
            .fetch_optional(pool)
            .await
    }

    /// Replace only the status field, returning the updated row.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: RequestStatus,
    ) -> Result<Option<PickupRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE pickup_requests SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PickupRequest>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pickup request by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pickup_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
