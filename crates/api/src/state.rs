use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::NotificationService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notify_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Business rules for the `/notifications` resource.
    pub notifications: NotificationService,
}

impl AppState {
    pub fn new(pool: notify_db::DbPool, config: ServerConfig) -> Self {
        Self {
            notifications: NotificationService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
