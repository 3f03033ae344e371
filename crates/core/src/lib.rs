//! Domain logic shared across the ecobin backend.
//!
//! Keeps the request-workflow rules, the error taxonomy, and well-known
//! constants free of any HTTP or database dependency so they can be unit
//! tested in isolation.

pub mod error;
pub mod request;
pub mod roles;
pub mod types;
