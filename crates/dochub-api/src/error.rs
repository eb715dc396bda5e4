//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use dochub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return this so that `?` on any service call converts the domain
/// error into a response with the right status code.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::NotFound
            | ErrorKind::FolderNotFound
            | ErrorKind::OrganizationFolderNotFound
            | ErrorKind::FileNotFound => StatusCode::NOT_FOUND,

            ErrorKind::DuplicateActiveName
            | ErrorKind::DuplicateInactiveName
            | ErrorKind::DuplicateName
            | ErrorKind::AlreadyActive
            | ErrorKind::AlreadyInactive
            | ErrorKind::HasActiveDocuments
            | ErrorKind::HasInactiveDocuments
            | ErrorKind::FolderNotEmpty
            | ErrorKind::NotArchived => StatusCode::CONFLICT,

            ErrorKind::InvalidExtension
            | ErrorKind::EmptyFilename
            | ErrorKind::InvalidCategory
            | ErrorKind::Validation => StatusCode::BAD_REQUEST,

            ErrorKind::FolderCreateFailed
            | ErrorKind::FolderRenameFailed
            | ErrorKind::FileWriteFailed
            | ErrorKind::FileRenameFailed
            | ErrorKind::FileDeleteFailed
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Internal => {
                tracing::error!(error = %err.message, kind = %err.kind, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
