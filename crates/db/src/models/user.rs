//! User account model.
//!
//! The password hash is stored in PHC string format and never serialized
//! back to API clients.

use ecobin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub active: bool,
    pub role_name: String,
}

/// DTO for registering a new user. The plaintext password is hashed at
/// the API layer before it reaches the repository.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: Option<String>,
    pub email: String,
    pub password: String,
    pub role_name: Option<String>,
}

/// Insert shape used by the repository: the password is already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role_name: String,
}
