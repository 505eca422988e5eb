//! Persistence gateway for the notification service.
//!
//! Owns the storage schema (embedded migrations), connection pool creation,
//! and the [`UnitOfWork`] handle every repository call runs inside.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// A transactional handle scoped to one request.
///
/// Call `commit()` to persist. Dropping the handle without committing rolls
/// the transaction back and returns the connection to the pool, so every
/// early return or `?` leaves storage untouched.
pub type UnitOfWork = sqlx::Transaction<'static, sqlx::Sqlite>;

/// Storage target used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Maximum pool size for file-backed databases.
const MAX_FILE_CONNECTIONS: u32 = 20;

/// Migrations embedded from `crates/db/migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Whether a connection URL points at a private in-memory database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create a connection pool from a database URL.
///
/// An in-memory database lives only as long as its connection, so those URLs
/// get a single connection that is never reaped. File URLs create the file
/// on first use and run in WAL mode.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if is_in_memory(database_url) {
        tracing::debug!("Opening in-memory database");
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    } else {
        tracing::debug!(url = %database_url, "Opening file-backed database");
        SqlitePoolOptions::new()
            .max_connections(MAX_FILE_CONNECTIONS)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await
    }
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Open a new unit of work on the pool.
pub async fn begin_unit_of_work(pool: &DbPool) -> Result<UnitOfWork, sqlx::Error> {
    pool.begin().await
}
