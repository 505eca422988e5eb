//! Service layer: business rules sitting between handlers and repositories.
//!
//! Every service method opens exactly one [`notify_db::UnitOfWork`], commits
//! it on success, and lets it roll back on any error.

pub mod notification;

pub use notification::NotificationService;

use notify_core::error::CoreError;

/// Failure of a service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A business-rule failure (validation, not found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The storage engine failed.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
