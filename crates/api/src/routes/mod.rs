pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notifications                         list, create
/// /notifications/bulk-read               mark many read (POST)
/// /notifications/unread-count            unread count for a role (GET)
/// /notifications/priority-counts         per-priority counts for a role (GET)
/// /notifications/{id}                    get, update (PATCH, PUT), delete
/// /notifications/{id}/read               mark read (PATCH, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notifications", notification::router())
}
