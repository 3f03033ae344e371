//! Handlers for the `/complaint` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::types::DbId;
use ecobin_db::models::complaint::{Complaint, CreateComplaint, UpdateComplaint};
use ecobin_db::repositories::ComplaintRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /complaint/save
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateComplaint>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let complaint = ComplaintRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Complaint filed by {}", complaint.name),
        }),
    ))
}

/// GET /complaint/get-all-complaints
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Complaint>>>> {
    let complaints = ComplaintRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: complaints }))
}

/// PUT /complaint/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaint>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    let complaint = ComplaintRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(DataResponse { data: complaint }))
}

/// DELETE /complaint/delete-complaint/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ComplaintRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Complaint {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))
    }
}
