//! DocHub Server — document registry and archive platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use dochub_core::config::AppConfig;
use dochub_core::error::AppError;
use dochub_storage::directory::DirectoryStore;
use dochub_storage::file::FileStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("DOCHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database directory + connection + migrations ─────
    if let Some(parent) = std::path::Path::new(&config.database.url)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::internal(format!("Failed to create dir '{}': {e}", parent.display()))
        })?;
    }

    tracing::info!("Connecting to database...");
    let db_pool = dochub_database::connection::create_pool(&config.database).await?;

    dochub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize storage ───────────────────────────────
    tracing::info!(root = %config.storage.uploads_root, "Initializing upload storage...");
    let directories = Arc::new(DirectoryStore::new(&config.storage.uploads_root).await?);
    let files = Arc::new(FileStore::new());

    // ── Step 3: Initialize repositories ──────────────────────────
    let organization_repo = Arc::new(
        dochub_database::repositories::organization::OrganizationRepository::new(db_pool.clone()),
    );
    let document_repo = Arc::new(
        dochub_database::repositories::document::DocumentRepository::new(db_pool.clone()),
    );

    // ── Step 4: Initialize services ──────────────────────────────
    let organization_service = Arc::new(
        dochub_service::organization::service::OrganizationService::new(
            Arc::clone(&organization_repo),
            Arc::clone(&document_repo),
            Arc::clone(&directories),
        ),
    );
    let document_service = Arc::new(dochub_service::document::service::DocumentService::new(
        Arc::clone(&document_repo),
        Arc::clone(&organization_repo),
        Arc::clone(&directories),
        Arc::clone(&files),
    ));
    let download_service = Arc::new(dochub_service::document::download::DownloadService::new(
        Arc::clone(&document_repo),
        Arc::clone(&organization_repo),
        Arc::clone(&directories),
        Arc::clone(&files),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = dochub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        organization_service,
        document_service,
        download_service,
    };

    let app = dochub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DocHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("DocHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
