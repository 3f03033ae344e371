//! Route definitions for user accounts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/get-all-users", get(user::get_all))
}
