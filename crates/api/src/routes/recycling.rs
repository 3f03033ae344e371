//! Route definitions for recycling image classification.

use axum::routing::post;
use axum::Router;

use crate::handlers::recycling;
use crate::state::AppState;

/// Routes mounted at `/recycling`.
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(recycling::analyze))
}
