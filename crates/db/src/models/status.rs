//! Enumerations stored in PostgreSQL by their symbolic name.
//!
//! Each enum maps to a PostgreSQL enum type created in the migrations,
//! with SCREAMING_SNAKE_CASE labels on both the wire and in the database.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a pickup request.
///
/// Any status may move to any other; there is no transition table. The
/// initial value for new requests comes from server configuration and
/// defaults to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "request_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(format!("Unknown request status: {other}")),
        }
    }
}

/// Category of waste a bin or schedule handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "waste_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WasteType {
    Organic,
    Plastic,
    Paper,
    Metal,
}

/// Fill level of a tracked bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "bin_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinStatus {
    Empty,
    HalfFull,
    Full,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_status_parses_symbolic_names() {
        assert_eq!(
            "IN_PROGRESS".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        assert!("NEW".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn request_status_serializes_symbolic_names() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
