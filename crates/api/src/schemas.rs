//! Wire schemas for the `/notifications` resource.
//!
//! These types only check shape: presence, JSON types and length bounds.
//! Business rules (non-empty fields, priority membership on create and
//! update) are applied by [`crate::services::NotificationService`].
//!
//! Length bounds mirror `MAX_TITLE_LENGTH` (255) and `MAX_ROLE_LENGTH` (100)
//! in `notify_core::notification`.

use notify_core::error::CoreError;
use notify_core::notification::{NotificationDraft, NotificationPatch};
use notify_core::priority::validate_priority;
use notify_core::types::DbId;
use notify_db::models::notification::NotificationFilter;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body of `POST /notifications`.
///
/// Client-supplied `id`, `is_read` or `created_at` keys are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(max = 255))]
    pub title: String,
    pub message: String,
    pub priority: Option<String>,
    #[validate(length(max = 100))]
    pub role: String,
}

impl From<CreateNotificationRequest> for NotificationDraft {
    fn from(req: CreateNotificationRequest) -> Self {
        NotificationDraft {
            title: req.title,
            message: req.message,
            priority: req.priority,
            role: req.role,
        }
    }
}

/// Body of `PATCH`/`PUT /notifications/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub message: Option<String>,
    pub priority: Option<String>,
    #[validate(length(max = 100))]
    pub role: Option<String>,
    pub is_read: Option<bool>,
}

impl From<UpdateNotificationRequest> for NotificationPatch {
    fn from(req: UpdateNotificationRequest) -> Self {
        NotificationPatch {
            title: req.title,
            message: req.message,
            priority: req.priority,
            role: req.role,
            is_read: req.is_read,
        }
    }
}

/// Query parameters for `GET /notifications`.
///
/// A parameter sent with an empty value (`?role=`) means no filter.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListNotificationsQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "optional_bool")]
    pub is_read: Option<bool>,
    /// Shorthand for `is_read=false`; ignored when `is_read` is given.
    /// Only a case-insensitive `true` enables it; other values are ignored.
    #[serde(default, deserialize_with = "unread_flag")]
    pub unread: Option<bool>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        None => Ok(None),
        Some(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(DeError::custom(format!(
                "provided string was not `true` or `false`: '{text}'"
            ))),
        },
    }
}

fn unread_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = empty_as_none(deserializer)?;
    Ok(value.map(|text| text.trim().eq_ignore_ascii_case("true")))
}

impl ListNotificationsQuery {
    /// Convert into a repository filter, rejecting unknown priorities.
    pub fn into_filter(self) -> Result<NotificationFilter, CoreError> {
        if let Some(ref priority) = self.priority {
            validate_priority(priority).map_err(CoreError::Validation)?;
        }
        let is_read = self
            .is_read
            .or_else(|| self.unread.and_then(|unread| unread.then_some(false)));

        Ok(NotificationFilter {
            role: self.role,
            priority: self.priority,
            is_read,
        })
    }
}

/// Query parameters for the per-role aggregate endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct RoleQuery {
    #[validate(length(min = 1, max = 100))]
    pub role: String,
}

/// Body of `POST /notifications/bulk-read`. At most 1000 ids per call.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkReadRequest {
    #[validate(length(min = 1, max = 1000))]
    pub ids: Vec<DbId>,
}

/// Response of `POST /notifications/bulk-read`.
#[derive(Debug, Serialize)]
pub struct BulkReadResponse {
    pub marked_read: u64,
}

/// Response of `GET /notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub role: String,
    pub count: i64,
}
