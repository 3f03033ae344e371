//! Handlers for the `/role` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_db::models::role::{CreateRole, Role};
use ecobin_db::repositories::RoleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /role/create-new-role
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRole>,
) -> AppResult<(StatusCode, Json<DataResponse<Role>>)> {
    if RoleRepo::exists(&state.pool, &input.role_name).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Role '{}' already exists",
            input.role_name
        ))));
    }

    let role = RoleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: role })))
}

/// GET /role/get-all-roles
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Role>>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: roles }))
}
