//! Handlers for the `/user` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::roles::ROLE_USER;
use ecobin_db::models::user::{NewUser, RegisterUser, User};
use ecobin_db::repositories::UserRepo;

use crate::auth::password::{self, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /user/register
///
/// Hashes the password with Argon2id before it reaches storage. The
/// created user is returned without the hash; duplicate emails surface
/// as a 409 via the storage-layer unique constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    password::validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = password::hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let new_user = NewUser {
        first_name: input.first_name,
        last_name: input.last_name,
        contact_number: input.contact_number,
        email: input.email,
        password_hash,
        role_name: input.role_name.unwrap_or_else(|| ROLE_USER.to_string()),
    };

    let user = UserRepo::create(&state.pool, &new_user).await?;

    tracing::info!(id = user.id, email = %user.email, "User registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /user/get-all-users
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}
