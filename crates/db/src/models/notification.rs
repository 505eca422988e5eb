//! Notification entity model and DTOs.

use notify_core::types::{timestamp_format, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub role: String,
    pub is_read: bool,
    #[serde(with = "timestamp_format")]
    pub created_at: Timestamp,
}

/// DTO for inserting a notification. Defaults are applied by the caller.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub title: String,
    pub message: String,
    pub priority: String,
    pub role: String,
    pub is_read: bool,
}

/// DTO for updating an existing notification. All fields are optional.
///
/// `id` and `created_at` are immutable and have no field here.
#[derive(Debug, Clone, Default)]
pub struct UpdateNotification {
    pub title: Option<String>,
    pub message: Option<String>,
    pub priority: Option<String>,
    pub role: Option<String>,
    pub is_read: Option<bool>,
}

/// Optional equality filters for listing. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub role: Option<String>,
    pub priority: Option<String>,
    pub is_read: Option<bool>,
}

/// Number of notifications sharing one priority.
#[derive(Debug, Clone, FromRow)]
pub struct PriorityCount {
    pub priority: String,
    pub count: i64,
}
