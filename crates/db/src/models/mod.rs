//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches
//!
//! JSON fields use camelCase to match the public API surface.

pub mod bin_inventory;
pub mod bin_location;
pub mod complaint;
pub mod feedback;
pub mod request;
pub mod role;
pub mod schedule;
pub mod status;
pub mod user;
