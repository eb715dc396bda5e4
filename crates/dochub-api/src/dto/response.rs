//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dochub_entity::document::{Document, DocumentCategory, DocumentFormat};
use dochub_entity::organization::Organization;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Organization snapshot for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationResponse {
    /// Organization ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether the organization is active.
    pub active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            active: organization.is_active,
            created_at: organization.created_at,
        }
    }
}

/// Document snapshot for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: i64,
    /// The owning organization.
    pub organization_id: i64,
    /// Current on-disk file name.
    pub stored_name: String,
    /// File format.
    pub format: DocumentFormat,
    /// Inbound or outbound.
    pub category: DocumentCategory,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the document is active.
    pub active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            organization_id: document.organization_id,
            stored_name: document.stored_name,
            format: document.format,
            category: document.category,
            description: document.description,
            active: document.is_active,
            created_at: document.created_at,
        }
    }
}

/// Count response for bulk operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of records affected.
    pub count: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}
