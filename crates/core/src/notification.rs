//! Notification field rules and service inputs.
//!
//! Every create and update passes through [`NotificationDraft::validate`] or
//! [`NotificationPatch::validate`] before anything is written.

use crate::error::CoreError;
use crate::priority::{resolve_priority, validate_priority};

/// Entity name used in not-found errors.
pub const NOTIFICATION_ENTITY: &str = "Notification";

/// Maximum length of a notification title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a recipient role in characters.
pub const MAX_ROLE_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn validate_required(field: &str, value: &str, max_len: Option<usize>) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(format!("{field} exceeds maximum length of {max} characters"));
        }
    }
    Ok(())
}

/// Validate a title: non-empty and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    validate_required("title", title, Some(MAX_TITLE_LENGTH))
}

/// Validate a message body: non-empty, no upper bound.
pub fn validate_message(message: &str) -> Result<(), String> {
    validate_required("message", message, None)
}

/// Validate a recipient role: non-empty and at most [`MAX_ROLE_LENGTH`] characters.
pub fn validate_role(role: &str) -> Result<(), String> {
    validate_required("role", role, Some(MAX_ROLE_LENGTH))
}

// ---------------------------------------------------------------------------
// Service inputs
// ---------------------------------------------------------------------------

/// Fields supplied when creating a notification.
///
/// `id`, `is_read` and `created_at` are never part of a draft; the service
/// assigns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    /// Defaults to `normal` when omitted.
    pub priority: Option<String>,
    pub role: String,
}

impl NotificationDraft {
    /// Check all fields, returning the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title).map_err(CoreError::Validation)?;
        validate_message(&self.message).map_err(CoreError::Validation)?;
        validate_role(&self.role).map_err(CoreError::Validation)?;
        self.resolved_priority()?;
        Ok(())
    }

    /// The priority to store: the supplied value, or the default.
    pub fn resolved_priority(&self) -> Result<&str, CoreError> {
        resolve_priority(self.priority.as_deref()).map_err(CoreError::Validation)
    }
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub priority: Option<String>,
    pub role: Option<String>,
    pub is_read: Option<bool>,
}

impl NotificationPatch {
    /// Apply the creation rules to every field that is present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(ref title) = self.title {
            validate_title(title).map_err(CoreError::Validation)?;
        }
        if let Some(ref message) = self.message {
            validate_message(message).map_err(CoreError::Validation)?;
        }
        if let Some(ref role) = self.role {
            validate_role(role).map_err(CoreError::Validation)?;
        }
        if let Some(ref priority) = self.priority {
            validate_priority(priority).map_err(CoreError::Validation)?;
        }
        Ok(())
    }

    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.message.is_none()
            && self.priority.is_none()
            && self.role.is_none()
            && self.is_read.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NotificationDraft {
        NotificationDraft {
            title: "Deploy done".to_string(),
            message: "ok".to_string(),
            priority: None,
            role: "ops".to_string(),
        }
    }

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- field validators ----------------------------------------------------

    #[test]
    fn title_at_limit_accepted() {
        assert!(validate_title(&"t".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn title_over_limit_rejected() {
        let err = validate_title(&"t".repeat(MAX_TITLE_LENGTH + 1)).unwrap_err();
        assert!(err.contains("maximum length of 255"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        assert!(validate_title(&"é".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn whitespace_only_values_rejected() {
        assert!(validate_title("   ").is_err());
        assert!(validate_message("\n").is_err());
        assert!(validate_role("").is_err());
    }

    #[test]
    fn long_message_accepted() {
        assert!(validate_message(&"m".repeat(100_000)).is_ok());
    }

    #[test]
    fn role_over_limit_rejected() {
        assert!(validate_role(&"r".repeat(MAX_ROLE_LENGTH)).is_ok());
        assert!(validate_role(&"r".repeat(MAX_ROLE_LENGTH + 1)).is_err());
    }

    // -- NotificationDraft ---------------------------------------------------

    #[test]
    fn draft_without_priority_resolves_to_normal() {
        let draft = draft();
        assert!(draft.validate().is_ok());
        assert_eq!(draft.resolved_priority().unwrap(), "normal");
    }

    #[test]
    fn draft_with_unknown_priority_rejected() {
        let draft = NotificationDraft {
            priority: Some("urgent".to_string()),
            ..draft()
        };
        let msg = validation_message(draft.validate().unwrap_err());
        assert!(msg.contains("urgent"));
    }

    #[test]
    fn draft_with_empty_title_rejected() {
        let draft = NotificationDraft {
            title: String::new(),
            ..draft()
        };
        let msg = validation_message(draft.validate().unwrap_err());
        assert_eq!(msg, "title must not be empty");
    }

    #[test]
    fn draft_with_empty_role_rejected() {
        let draft = NotificationDraft {
            role: " ".to_string(),
            ..draft()
        };
        assert!(draft.validate().is_err());
    }

    // -- NotificationPatch ---------------------------------------------------

    #[test]
    fn empty_patch_is_valid() {
        let patch = NotificationPatch::default();
        assert!(patch.is_empty());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn patch_rechecks_priority() {
        let patch = NotificationPatch {
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_cannot_blank_required_fields() {
        for patch in [
            NotificationPatch {
                title: Some(String::new()),
                ..Default::default()
            },
            NotificationPatch {
                message: Some(String::new()),
                ..Default::default()
            },
            NotificationPatch {
                role: Some(String::new()),
                ..Default::default()
            },
        ] {
            assert!(patch.validate().is_err(), "{patch:?} should be rejected");
        }
    }

    #[test]
    fn patch_with_only_is_read_is_not_empty() {
        let patch = NotificationPatch {
            is_read: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert!(patch.validate().is_ok());
    }
}
