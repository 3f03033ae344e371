//! Route definitions for complaints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Routes mounted at `/complaint`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(complaint::save))
        .route("/get-all-complaints", get(complaint::get_all))
        .route("/update/{id}", put(complaint::update))
        .route("/delete-complaint/{id}", delete(complaint::delete))
}
