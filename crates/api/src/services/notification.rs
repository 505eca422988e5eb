//! Notification service.

use std::collections::BTreeMap;

use notify_core::error::CoreError;
use notify_core::notification::{NotificationDraft, NotificationPatch, NOTIFICATION_ENTITY};
use notify_core::priority::VALID_PRIORITIES;
use notify_core::types::DbId;
use notify_db::models::notification::{
    CreateNotification, Notification, NotificationFilter, UpdateNotification,
};
use notify_db::repositories::NotificationRepo;
use notify_db::{begin_unit_of_work, DbPool};

use super::ServiceResult;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: NOTIFICATION_ENTITY,
        id,
    }
}

/// Enforces notification rules and runs each operation in its own unit of work.
#[derive(Clone)]
pub struct NotificationService {
    pool: DbPool,
}

impl NotificationService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validate a draft, apply defaults, and persist it.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_notification(&self, draft: NotificationDraft) -> ServiceResult<Notification> {
        draft.validate()?;
        let priority = draft.resolved_priority()?.to_string();

        let input = CreateNotification {
            title: draft.title,
            message: draft.message,
            priority,
            role: draft.role,
            is_read: false,
        };

        let mut uow = begin_unit_of_work(&self.pool).await?;
        let notification = NotificationRepo::create(&mut uow, &input).await?;
        uow.commit().await?;

        tracing::info!(
            notification_id = notification.id,
            role = %notification.role,
            priority = %notification.priority,
            "Notification created",
        );

        Ok(notification)
    }

    /// Fetch one notification.
    pub async fn get_notification(&self, id: DbId) -> ServiceResult<Notification> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let notification = NotificationRepo::find_by_id(&mut uow, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        uow.commit().await?;
        Ok(notification)
    }

    /// List notifications matching the filter, in creation order.
    pub async fn list_notifications(
        &self,
        filter: &NotificationFilter,
    ) -> ServiceResult<Vec<Notification>> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let notifications = NotificationRepo::list(&mut uow, filter).await?;
        uow.commit().await?;
        Ok(notifications)
    }

    /// Mark a notification as read. Repeating the call is a successful no-op.
    pub async fn mark_as_read(&self, id: DbId) -> ServiceResult<Notification> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let notification = NotificationRepo::mark_read(&mut uow, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        uow.commit().await?;

        tracing::debug!(notification_id = id, "Notification marked read");
        Ok(notification)
    }

    /// Apply a partial update after re-checking every supplied field.
    pub async fn update_notification(
        &self,
        id: DbId,
        patch: NotificationPatch,
    ) -> ServiceResult<Notification> {
        patch.validate()?;

        let mut uow = begin_unit_of_work(&self.pool).await?;
        let found = if patch.is_empty() {
            NotificationRepo::find_by_id(&mut uow, id).await?
        } else {
            let input = UpdateNotification {
                title: patch.title,
                message: patch.message,
                priority: patch.priority,
                role: patch.role,
                is_read: patch.is_read,
            };
            NotificationRepo::update(&mut uow, id, &input).await?
        };
        let notification = found.ok_or_else(|| not_found(id))?;
        uow.commit().await?;

        tracing::info!(notification_id = id, "Notification updated");
        Ok(notification)
    }

    /// Delete a notification. Fails with not-found if it does not exist.
    pub async fn delete_notification(&self, id: DbId) -> ServiceResult<()> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        if !NotificationRepo::delete(&mut uow, id).await? {
            return Err(not_found(id).into());
        }
        uow.commit().await?;

        tracing::info!(notification_id = id, "Notification deleted");
        Ok(())
    }

    /// Mark several notifications as read at once.
    ///
    /// Returns how many of the given ids existed. Unknown ids are skipped.
    pub async fn bulk_mark_read(&self, ids: &[DbId]) -> ServiceResult<u64> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let marked = NotificationRepo::mark_read_many(&mut uow, ids).await?;
        uow.commit().await?;

        tracing::info!(requested = ids.len(), marked, "Notifications bulk marked read");
        Ok(marked)
    }

    /// Number of unread notifications addressed to a role.
    pub async fn unread_count(&self, role: &str) -> ServiceResult<i64> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let count = NotificationRepo::unread_count(&mut uow, role).await?;
        uow.commit().await?;
        Ok(count)
    }

    /// Count a role's notifications per priority.
    ///
    /// Every valid priority is present in the result, zero when unused.
    pub async fn count_by_priority(&self, role: &str) -> ServiceResult<BTreeMap<String, i64>> {
        let mut uow = begin_unit_of_work(&self.pool).await?;
        let rows = NotificationRepo::count_by_priority(&mut uow, role).await?;
        uow.commit().await?;

        let mut counts: BTreeMap<String, i64> = VALID_PRIORITIES
            .iter()
            .map(|p| (p.to_string(), 0))
            .collect();
        for row in rows {
            counts.insert(row.priority, row.count);
        }
        Ok(counts)
    }
}
