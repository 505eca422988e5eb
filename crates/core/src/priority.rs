//! Notification priority constants.
//!
//! These must match the `CHECK` constraint on `notifications.priority` in
//! `20261019000001_create_notifications.sql`.

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_CRITICAL: &str = "critical";

/// Priority applied when a notification is created without one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_NORMAL;

/// All valid priorities, lowest first.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_NORMAL,
    PRIORITY_HIGH,
    PRIORITY_CRITICAL,
];

/// Validate that a priority is one of the enumerated values.
///
/// Matching is exact: `"High"` and `" high"` are rejected, never coerced.
pub fn validate_priority(priority: &str) -> Result<(), String> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        ))
    }
}

/// Resolve an optional priority to the value that should be stored.
pub fn resolve_priority(priority: Option<&str>) -> Result<&str, String> {
    match priority {
        Some(p) => validate_priority(p).map(|()| p),
        None => Ok(DEFAULT_PRIORITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_priorities_accepted() {
        for p in VALID_PRIORITIES {
            assert!(validate_priority(p).is_ok(), "{p} should be valid");
        }
    }

    #[test]
    fn unknown_priority_rejected() {
        let err = validate_priority("urgent").unwrap_err();
        assert!(err.contains("Invalid priority 'urgent'"));
        assert!(err.contains("low, normal, high, critical"));
    }

    #[test]
    fn priority_is_case_sensitive() {
        assert!(validate_priority("High").is_err());
        assert!(validate_priority("").is_err());
    }

    #[test]
    fn missing_priority_defaults_to_normal() {
        assert_eq!(resolve_priority(None), Ok("normal"));
    }

    #[test]
    fn supplied_priority_is_kept() {
        assert_eq!(resolve_priority(Some("critical")), Ok("critical"));
        assert!(resolve_priority(Some("urgent")).is_err());
    }

    #[test]
    fn priority_list_complete() {
        assert_eq!(VALID_PRIORITIES.len(), 4);
    }
}
