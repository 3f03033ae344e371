//! Route definitions for the pickup-request workflow.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Routes mounted at `/request`.
///
/// ```text
/// POST   /save                   -> save
/// GET    /get-all-request        -> get_all
/// PUT    /update/{id}            -> update
/// PUT    /{id}/update-status     -> update_status
/// DELETE /delete-request/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(request::save))
        .route("/get-all-request", get(request::get_all))
        .route("/update/{id}", put(request::update))
        .route("/{id}/update-status", put(request::update_status))
        .route("/delete-request/{id}", delete(request::delete))
}
