//! Organization lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use dochub_core::error::AppError;
use dochub_core::types::pagination::PageResponse;

use crate::dto::request::{NameQuery, SaveOrganizationRequest};
use crate::dto::response::{ApiResponse, OrganizationResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/organizations
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<SaveOrganizationRequest>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let organization = state.organization_service.create(&req.name).await?;
    Ok(Json(ApiResponse::ok(organization.into())))
}

/// PUT /api/organizations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<SaveOrganizationRequest>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let organization = state.organization_service.update(id, &req.name).await?;
    Ok(Json(ApiResponse::ok(organization.into())))
}

/// PUT /api/organizations/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.organization_service.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// PUT /api/organizations/{id}/activate
pub async fn activate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.organization_service.activate(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// DELETE /api/organizations/{id}
pub async fn delete_permanently(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.organization_service.permanent_delete(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// GET /api/organizations/active
pub async fn list_active(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<OrganizationResponse>>>, ApiError> {
    list(state, params, true).await
}

/// GET /api/organizations/inactive
pub async fn list_inactive(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<OrganizationResponse>>>, ApiError> {
    list(state, params, false).await
}

/// GET /api/organizations/active/by-name?name=...
pub async fn get_active_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    get_by_name(state, query, true).await
}

/// GET /api/organizations/inactive/by-name?name=...
pub async fn get_inactive_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    get_by_name(state, query, false).await
}

async fn list(
    state: AppState,
    params: PaginationParams,
    active: bool,
) -> Result<Json<ApiResponse<PageResponse<OrganizationResponse>>>, ApiError> {
    let page = params.into_page_request();
    let result = state.organization_service.list(active, &page).await?;
    Ok(Json(ApiResponse::ok(result.map(OrganizationResponse::from))))
}

async fn get_by_name(
    state: AppState,
    query: NameQuery,
    active: bool,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let organization = state
        .organization_service
        .get_by_name(&query.name, active)
        .await?;
    Ok(Json(ApiResponse::ok(organization.into())))
}
