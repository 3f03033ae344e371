//! Route definitions for roles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

/// Routes mounted at `/role`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-new-role", post(role::create))
        .route("/get-all-roles", get(role::get_all))
}
