//! Shared response envelope types for API handlers.
//!
//! List and update endpoints wrap their payload in a `{ "data": ... }`
//! envelope; save and delete endpoints answer with a confirmation
//! `{ "message": ... }`. Use these instead of ad-hoc `serde_json::json!`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "message": ... }` confirmation envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
