//! HTTP request handlers, one module per resource.

pub mod bin_inventory;
pub mod bin_location;
pub mod complaint;
pub mod feedback;
pub mod recycling;
pub mod request;
pub mod role;
pub mod schedule;
pub mod user;
