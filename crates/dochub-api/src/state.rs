//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use dochub_core::config::AppConfig;
use dochub_service::document::download::DownloadService;
use dochub_service::document::service::DocumentService;
use dochub_service::organization::service::OrganizationService;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool (health checks).
    pub db_pool: SqlitePool,
    /// Organization lifecycle service.
    pub organization_service: Arc<OrganizationService>,
    /// Document lifecycle service.
    pub document_service: Arc<DocumentService>,
    /// Document download service.
    pub download_service: Arc<DownloadService>,
}
