//! Well-known role name constants.
//!
//! These must match the rows written by the startup seeding step in
//! `ecobin-api`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";
