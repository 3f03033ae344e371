//! Route definitions, one module per resource.

pub mod bin_inventory;
pub mod bin_location;
pub mod complaint;
pub mod feedback;
pub mod health;
pub mod recycling;
pub mod request;
pub mod role;
pub mod schedule;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// All resource routers, nested under their path prefixes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/request", request::router())
        .nest("/bin-location", bin_location::router())
        .nest("/bin-inventory", bin_inventory::router())
        .nest("/complaint", complaint::router())
        .nest("/feedback", feedback::router())
        .nest("/schedule", schedule::router())
        .nest("/user", user::router())
        .nest("/role", role::router())
        .nest("/recycling", recycling::router())
}
