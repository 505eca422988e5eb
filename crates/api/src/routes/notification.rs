//! Route definitions for the `/notifications` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// POST   /bulk-read         -> bulk_mark_read
/// GET    /unread-count      -> unread_count
/// GET    /priority-counts   -> priority_counts
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/read         -> mark_read
/// POST   /{id}/read         -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list).post(notification::create))
        .route("/bulk-read", post(notification::bulk_mark_read))
        .route("/unread-count", get(notification::unread_count))
        .route("/priority-counts", get(notification::priority_counts))
        .route(
            "/{id}",
            get(notification::get_by_id)
                .patch(notification::update)
                .put(notification::update)
                .delete(notification::delete),
        )
        .route(
            "/{id}/read",
            patch(notification::mark_read).post(notification::mark_read),
        )
}
