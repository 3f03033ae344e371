//! Handlers for the `/bin-inventory` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecobin_core::error::CoreError;
use ecobin_core::types::DbId;
use ecobin_db::models::bin_inventory::{
    BinInventorySlot, CreateBinInventorySlot, UpdateBinInventorySlot,
};
use ecobin_db::repositories::BinInventoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /bin-inventory/save
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<CreateBinInventorySlot>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let slot = BinInventoryRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Bin inventory slot saved at {}", slot.address),
        }),
    ))
}

/// GET /bin-inventory/get-all
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BinInventorySlot>>>> {
    let slots = BinInventoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: slots }))
}

/// PUT /bin-inventory/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBinInventorySlot>,
) -> AppResult<Json<DataResponse<BinInventorySlot>>> {
    let slot = BinInventoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BinInventorySlot",
            id,
        }))?;
    Ok(Json(DataResponse { data: slot }))
}

/// DELETE /bin-inventory/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BinInventoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: format!("Bin inventory slot {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BinInventorySlot",
            id,
        }))
    }
}
