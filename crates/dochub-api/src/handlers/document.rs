//! Document lifecycle, filter, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use validator::Validate;

use dochub_core::error::AppError;
use dochub_core::types::pagination::PageResponse;
use dochub_service::document::service::{CreateDocumentRequest, FilterDocumentsRequest};

use crate::dto::request::SaveDocumentRequest;
use crate::dto::response::{ApiResponse, CountResponse, DocumentResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/documents — multipart upload
///
/// Expects a `document` part carrying the [`SaveDocumentRequest`] JSON and
/// a `file` part carrying the upload itself.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<DocumentResponse>>, ApiError> {
    let mut document: Option<SaveDocumentRequest> = None;
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "document" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                document = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| AppError::validation(format!("Invalid document part: {e}")))?,
                );
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let document = document.ok_or_else(|| AppError::validation("document part is required"))?;
    document
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let data = data.ok_or_else(|| AppError::validation("file part is required"))?;

    let created = state
        .document_service
        .create(CreateDocumentRequest {
            organization_id: document.organization_id,
            name: document.name,
            category: document.category,
            description: document.description,
            file_name: file_name.unwrap_or_default(),
            data,
        })
        .await?;
    Ok(Json(ApiResponse::ok(created.into())))
}

/// PUT /api/documents/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.document_service.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// PUT /api/documents/{id}/activate
pub async fn activate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.document_service.activate(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// DELETE /api/documents/{id}
pub async fn delete_permanently(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<i64>>, ApiError> {
    let id = state.document_service.permanent_delete(id).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// GET /api/documents/filter/active
pub async fn filter_active(
    State(state): State<AppState>,
    Query(filter): Query<FilterDocumentsRequest>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, ApiError> {
    filter_documents(state, filter, params, true).await
}

/// GET /api/documents/filter/inactive
pub async fn filter_inactive(
    State(state): State<AppState>,
    Query(filter): Query<FilterDocumentsRequest>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, ApiError> {
    filter_documents(state, filter, params, false).await
}

/// GET /api/documents/{id}/download
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let result = state.download_service.download(id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.filename),
        )
        .header(header::CONTENT_LENGTH, result.length)
        .body(Body::from_stream(result.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// DELETE /api/documents/organization/{id}/active
pub async fn bulk_delete_active(
    State(state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state
        .document_service
        .bulk_delete(organization_id, true)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// DELETE /api/documents/organization/{id}/inactive
pub async fn bulk_delete_inactive(
    State(state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state
        .document_service
        .bulk_delete(organization_id, false)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

async fn filter_documents(
    state: AppState,
    filter: FilterDocumentsRequest,
    params: PaginationParams,
    active: bool,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, ApiError> {
    let page = params.into_page_request();
    let result = state
        .document_service
        .filter(&filter, active, &page)
        .await?;
    Ok(Json(ApiResponse::ok(result.map(DocumentResponse::from))))
}
