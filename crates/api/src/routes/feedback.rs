//! Route definitions for feedback entries.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(feedback::save))
        .route("/get-all-feedback", get(feedback::get_all))
        .route("/update/{id}", put(feedback::update))
        .route("/delete-feedback/{id}", delete(feedback::delete))
}
