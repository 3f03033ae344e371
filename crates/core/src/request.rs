//! Pickup-request workflow rules.
//!
//! The request entity is the only one with derived state: the list of
//! assigned cleaner names is computed from the requested cleaner count on
//! every write, never supplied by a caller and never merged with a
//! previous value.

use crate::error::CoreError;

/// Derive the assigned-cleaner list for a requested cleaner count.
///
/// Produces `["Cleaner 1", "Cleaner 2", …, "Cleaner N"]` for a positive
/// count and an empty list otherwise. Callers must persist the result
/// as-is so that the list length always matches the stored count.
pub fn assigned_cleaners(count: Option<i32>) -> Vec<String> {
    match count {
        Some(n) if n > 0 => (1..=n).map(|i| format!("Cleaner {i}")).collect(),
        _ => Vec::new(),
    }
}

/// Validate the caller-supplied fields of a new or replaced request.
///
/// Requester name and email are required and must be non-blank; the
/// cleaner count, when present, must be non-negative.
pub fn validate_request_fields(
    requester_name: &str,
    email: &str,
    number_of_cleaners: Option<i32>,
) -> Result<(), CoreError> {
    if requester_name.trim().is_empty() {
        return Err(CoreError::Validation("requesterName is required".into()));
    }
    if email.trim().is_empty() {
        return Err(CoreError::Validation("email is required".into()));
    }
    if let Some(n) = number_of_cleaners {
        if n < 0 {
            return Err(CoreError::Validation(
                "numberOfCleaners must be non-negative".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_one_name_per_cleaner() {
        assert_eq!(
            assigned_cleaners(Some(3)),
            vec!["Cleaner 1", "Cleaner 2", "Cleaner 3"]
        );
    }

    #[test]
    fn single_cleaner() {
        assert_eq!(assigned_cleaners(Some(1)), vec!["Cleaner 1"]);
    }

    #[test]
    fn zero_negative_and_missing_counts_derive_empty_lists() {
        assert!(assigned_cleaners(Some(0)).is_empty());
        assert!(assigned_cleaners(Some(-4)).is_empty());
        assert!(assigned_cleaners(None).is_empty());
    }

    #[test]
    fn blank_requester_name_is_rejected() {
        let err = validate_request_fields("  ", "a@x.com", None).unwrap_err();
        assert!(err.to_string().contains("requesterName"));
    }

    #[test]
    fn blank_email_is_rejected() {
        let err = validate_request_fields("Alice", "", Some(2)).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn negative_cleaner_count_is_rejected() {
        let err = validate_request_fields("Alice", "a@x.com", Some(-1)).unwrap_err();
        assert!(err.to_string().contains("numberOfCleaners"));
    }

    #[test]
    fn valid_fields_pass() {
        assert!(validate_request_fields("Alice", "a@x.com", Some(0)).is_ok());
    }
}
