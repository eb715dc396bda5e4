//! Route definitions for the DocHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;

    let api_routes = Router::new()
        .merge(organization_routes())
        .merge(document_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Organization lifecycle and lookups
fn organization_routes() -> Router<AppState> {
    Router::new()
        .route("/organizations", post(handlers::organization::create))
        .route("/organizations/{id}", put(handlers::organization::update))
        .route(
            "/organizations/{id}",
            delete(handlers::organization::delete_permanently),
        )
        .route(
            "/organizations/{id}/deactivate",
            put(handlers::organization::deactivate),
        )
        .route(
            "/organizations/{id}/activate",
            put(handlers::organization::activate),
        )
        .route(
            "/organizations/active",
            get(handlers::organization::list_active),
        )
        .route(
            "/organizations/inactive",
            get(handlers::organization::list_inactive),
        )
        .route(
            "/organizations/active/by-name",
            get(handlers::organization::get_active_by_name),
        )
        .route(
            "/organizations/inactive/by-name",
            get(handlers::organization::get_inactive_by_name),
        )
}

/// Document lifecycle, filter, download, bulk delete
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", post(handlers::document::create))
        .route(
            "/documents/{id}",
            delete(handlers::document::delete_permanently),
        )
        .route(
            "/documents/{id}/deactivate",
            put(handlers::document::deactivate),
        )
        .route(
            "/documents/{id}/activate",
            put(handlers::document::activate),
        )
        .route(
            "/documents/filter/active",
            get(handlers::document::filter_active),
        )
        .route(
            "/documents/filter/inactive",
            get(handlers::document::filter_inactive),
        )
        .route("/documents/{id}/download", get(handlers::document::download))
        .route(
            "/documents/organization/{id}/active",
            delete(handlers::document::bulk_delete_active),
        )
        .route(
            "/documents/organization/{id}/inactive",
            delete(handlers::document::bulk_delete_inactive),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
