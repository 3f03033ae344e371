//! Handlers for the `/feedback` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::types::DbId;
use ecobin_db::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use ecobin_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /feedback/save
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Feedback received from {}", feedback.username),
        }),
    ))
}

/// GET /feedback/get-all-feedback
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Feedback>>>> {
    let entries = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// PUT /feedback/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedback>,
) -> AppResult<Json<DataResponse<Feedback>>> {
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(DataResponse { data: feedback }))
}

/// DELETE /feedback/delete-feedback/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FeedbackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Feedback {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))
    }
}
