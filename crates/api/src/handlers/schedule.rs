//! Handlers for the `/schedule` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::types::DbId;
use ecobin_db::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};
use ecobin_db::repositories::ScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /schedule/save
///
/// A missing waste type is a validation error rather than a
/// deserialization failure.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateSchedule>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let waste_type = input.waste_type.ok_or_else(|| {
        AppError::Core(CoreError::Validation("wasteType is required".to_string()))
    })?;

    let schedule = ScheduleRepo::create(&state.pool, &input, waste_type).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Schedule saved for {}", schedule.location),
        }),
    ))
}

/// GET /schedule/get-all-schedule
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Schedule>>>> {
    let schedules = ScheduleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: schedules }))
}

/// PUT /schedule/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSchedule>,
) -> AppResult<Json<DataResponse<Schedule>>> {
    let schedule = ScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;
    Ok(Json(DataResponse { data: schedule }))
}

/// DELETE /schedule/delete-schedule/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ScheduleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Schedule {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))
    }
}
