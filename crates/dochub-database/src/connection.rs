//! SQLite connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use dochub_core::config::database::DatabaseConfig;
use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;

/// Create a connection pool from configuration.
///
/// The configured URL may be a `sqlite:` URL or a bare file path; the
/// database file is created when missing.
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Connecting to SQLite"
    );

    let options = if config.url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(&config.url).map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Invalid database URL '{}'", config.url),
                e,
            )
        })?
    } else {
        SqliteConnectOptions::new().filename(&config.url)
    }
    .create_if_missing(true)
    .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Successfully connected to SQLite");
    Ok(pool)
}

/// Check database connectivity.
pub async fn health_check(pool: &SqlitePool) -> AppResult<bool> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|v| v == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
}
