//! Route definitions for bin locations.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::bin_location;
use crate::state::AppState;

/// Routes mounted at `/bin-location`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(bin_location::save))
        .route("/get-all", get(bin_location::get_all))
        .route("/update/{id}", put(bin_location::update))
        .route("/delete/{id}", delete(bin_location::delete))
}
