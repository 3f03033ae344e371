//! Handlers for the `/request` resource: the pickup-request workflow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::request::validate_request_fields;
use ecobin_core::types::DbId;
use ecobin_db::models::request::{
    CreateRequest, PickupRequest, UpdateRequest, UpdateRequestStatus,
};
use ecobin_db::repositories::RequestRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /request/save
///
/// Validates the requester fields, then inserts with the configured
/// initial status. The cleaner list is derived at the repository layer.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_request_fields(&input.requester_name, &input.email, input.number_of_cleaners)?;

    let request =
        RequestRepo::create(&state.pool, &input, state.config.default_request_status).await?;

    tracing::info!(id = request.id, requester = %request.requester_name, "Pickup request created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!(
                "Request saved for {} with {} cleaners!",
                request.requester_name, request.number_of_cleaners
            ),
        }),
    ))
}

/// GET /request/get-all-request
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PickupRequest>>>> {
    let requests = RequestRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// PUT /request/update/{id}
///
/// Full replacement of the caller-editable fields. `status` and
/// `request_date` survive unchanged; the cleaner list is regenerated.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<Json<DataResponse<PickupRequest>>> {
    validate_request_fields(&input.requester_name, &input.email, input.number_of_cleaners)?;

    let request = RequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;
    Ok(Json(DataResponse { data: request }))
}

/// PUT /request/{id}/update-status
///
/// Replaces only the status. A missing or null status in the body is a
/// validation error. Any status may move to any other.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequestStatus>,
) -> AppResult<Json<DataResponse<PickupRequest>>> {
    let status = input
        .status
        .ok_or_else(|| AppError::Core(CoreError::Validation("status is required".to_string())))?;

    let request = RequestRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;

    tracing::info!(id, status = ?request.status, "Pickup request status updated");

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /request/delete-request/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = RequestRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Request {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))
    }
}
