//! Route definitions for collection schedules.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedule`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(schedule::save))
        .route("/get-all-schedule", get(schedule::get_all))
        .route("/update/{id}", put(schedule::update))
        .route("/delete-schedule/{id}", delete(schedule::delete))
}
