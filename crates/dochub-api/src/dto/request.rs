//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use dochub_entity::document::DocumentCategory;

/// Body for creating or renaming an organization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveOrganizationRequest {
    /// Organization name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// JSON part of the multipart document upload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveDocumentRequest {
    /// Display name; informational metadata only.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Inbound or outbound.
    pub category: DocumentCategory,
    /// Optional description.
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    /// The owning organization.
    pub organization_id: i64,
}

/// Query parameters for the by-name organization lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NameQuery {
    /// Organization name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}
