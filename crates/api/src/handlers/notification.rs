//! Handlers for the `/notifications` resource.
//!
//! Each handler decodes its input, calls exactly one
//! [`NotificationService`](crate::services::NotificationService) operation,
//! and encodes the result. None of them touch storage directly.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notify_core::types::DbId;
use notify_db::models::notification::Notification;

use crate::error::AppResult;
use crate::extract::{AppPath, ValidatedJson, ValidatedQuery};
use crate::schemas::{
    BulkReadRequest, BulkReadResponse, CreateNotificationRequest, ListNotificationsQuery,
    RoleQuery, UnreadCountResponse, UpdateNotificationRequest,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Notification CRUD
// ---------------------------------------------------------------------------

/// POST /notifications
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNotificationRequest>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let notification = state.notifications.create_notification(input.into()).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /notifications
///
/// Optional `role`, `priority` and `is_read` filters; results are in
/// creation order. An empty result is a 200 with `[]`.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListNotificationsQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let filter = params.into_filter()?;
    let notifications = state.notifications.list_notifications(&filter).await?;
    Ok(Json(notifications))
}

/// GET /notifications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Notification>> {
    let notification = state.notifications.get_notification(id).await?;
    Ok(Json(notification))
}

/// PATCH | PUT /notifications/{id}
///
/// Partial update: omitted fields keep their current value.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNotificationRequest>,
) -> AppResult<Json<Notification>> {
    let notification = state
        .notifications
        .update_notification(id, input.into())
        .await?;
    Ok(Json(notification))
}

/// DELETE /notifications/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.notifications.delete_notification(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Read state
// ---------------------------------------------------------------------------

/// PATCH | POST /notifications/{id}/read
///
/// Returns the notification; calling it on an already-read notification
/// succeeds without changes.
pub async fn mark_read(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Notification>> {
    let notification = state.notifications.mark_as_read(id).await?;
    Ok(Json(notification))
}

/// POST /notifications/bulk-read
pub async fn bulk_mark_read(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<BulkReadRequest>,
) -> AppResult<Json<BulkReadResponse>> {
    let marked_read = state.notifications.bulk_mark_read(&input.ids).await?;
    Ok(Json(BulkReadResponse { marked_read }))
}

// ---------------------------------------------------------------------------
// Per-role aggregates
// ---------------------------------------------------------------------------

/// GET /notifications/unread-count?role=
pub async fn unread_count(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<RoleQuery>,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = state.notifications.unread_count(&params.role).await?;
    Ok(Json(UnreadCountResponse {
        role: params.role,
        count,
    }))
}

/// GET /notifications/priority-counts?role=
pub async fn priority_counts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<RoleQuery>,
) -> AppResult<Json<BTreeMap<String, i64>>> {
    let counts = state.notifications.count_by_priority(&params.role).await?;
    Ok(Json(counts))
}
