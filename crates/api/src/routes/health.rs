use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Where notifications are stored, derived from `DATABASE_URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// Lost when the process exits.
    InMemory,
    File,
}

impl StorageMode {
    pub fn from_database_url(url: &str) -> Self {
        if notify_db::is_in_memory(url) {
            Self::InMemory
        } else {
            Self::File
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `unavailable` when storage cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageMode,
    pub database_reachable: bool,
}

/// Reports storage mode and reachability; unreachable storage is a 503.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let storage = StorageMode::from_database_url(&state.config.database_url);

    let (status_code, status, database_reachable) = match notify_db::health_check(&state.pool).await
    {
        Ok(()) => (StatusCode::OK, "ok", true),
        Err(err) => {
            tracing::warn!(error = %err, ?storage, "Storage health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", false)
        }
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage,
        database_reachable,
    };
    (status_code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
