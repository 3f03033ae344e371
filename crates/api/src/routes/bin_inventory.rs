//! Route definitions for bin inventory slots.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::bin_inventory;
use crate::state::AppState;

/// Routes mounted at `/bin-inventory`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(bin_inventory::save))
        .route("/get-all", get(bin_inventory::get_all))
        .route("/update/{id}", put(bin_inventory::update))
        .route("/delete/{id}", delete(bin_inventory::delete))
}
