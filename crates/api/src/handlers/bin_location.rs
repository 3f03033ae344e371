//! Handlers for the `/bin-location` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::types::DbId;
use ecobin_db::models::bin_location::{BinLocation, CreateBinLocation, UpdateBinLocation};
use ecobin_db::repositories::BinLocationRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /bin-location/save
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateBinLocation>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let location = BinLocationRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Bin location saved at {}", location.address),
        }),
    ))
}

/// GET /bin-location/get-all
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BinLocation>>>> {
    let locations = BinLocationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// PUT /bin-location/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBinLocation>,
) -> AppResult<Json<DataResponse<BinLocation>>> {
    let location = BinLocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BinLocation",
            id,
        }))?;
    Ok(Json(DataResponse { data: location }))
}

/// DELETE /bin-location/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BinLocationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Bin location {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BinLocation",
            id,
        }))
    }
}
