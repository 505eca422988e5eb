//! Repository for the `notifications` table.

use chrono::{SubsecRound, Utc};
use notify_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::notification::{
    CreateNotification, Notification, NotificationFilter, PriorityCount, UpdateNotification,
};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, title, message, priority, role, is_read, created_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the stored row.
    ///
    /// `created_at` is taken from the server clock, truncated to microseconds
    /// so the stored value matches what the API serializes.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (title, message, priority, role, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.priority)
            .bind(&input.role)
            .bind(input.is_read)
            .bind(Utc::now().trunc_subsecs(6))
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a notification by its ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List notifications matching every supplied filter, in insertion order.
    pub async fn list(
        conn: &mut SqliteConnection,
        filter: &NotificationFilter,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE ($1 IS NULL OR role = $1) \
               AND ($2 IS NULL OR priority = $2) \
               AND ($3 IS NULL OR is_read = $3) \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&filter.role)
            .bind(&filter.priority)
            .bind(filter.is_read)
            .fetch_all(&mut *conn)
            .await
    }

    /// Update a notification. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateNotification,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET \
                title = COALESCE($2, title), \
                message = COALESCE($3, message), \
                priority = COALESCE($4, priority), \
                role = COALESCE($5, role), \
                is_read = COALESCE($6, is_read) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.priority)
            .bind(&input.role)
            .bind(input.is_read)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Mark a single notification as read.
    ///
    /// Already-read rows are matched too, so repeating the call returns the
    /// same row. Returns `None` only when the id does not exist.
    pub async fn mark_read(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_read = TRUE \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Mark every listed notification as read.
    ///
    /// Returns the number of rows matched. Unknown ids are ignored.
    pub async fn mark_read_many(
        conn: &mut SqliteConnection,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = (1..=ids.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!("UPDATE notifications SET is_read = TRUE WHERE id IN ({placeholders})");

        let mut q = sqlx::query(&query);
        for id in ids {
            q = q.bind(*id);
        }
        let result = q.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Delete a notification. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get the number of unread notifications for a role.
    pub async fn unread_count(conn: &mut SqliteConnection, role: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE role = $1 AND is_read = FALSE",
        )
        .bind(role)
        .fetch_one(&mut *conn)
        .await
    }

    /// Count a role's notifications grouped by priority.
    ///
    /// Priorities with no notifications are absent from the result.
    pub async fn count_by_priority(
        conn: &mut SqliteConnection,
        role: &str,
    ) -> Result<Vec<PriorityCount>, sqlx::Error> {
        sqlx::query_as::<_, PriorityCount>(
            "SELECT priority, COUNT(*) AS count FROM notifications \
             WHERE role = $1 \
             GROUP BY priority \
             ORDER BY priority",
        )
        .bind(role)
        .fetch_all(&mut *conn)
        .await
    }
}
