//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::DocumentCategory;
use super::format::DocumentFormat;

/// A single uploaded file plus metadata, scoped to exactly one organization.
///
/// `stored_name` is the authoritative on-disk file name inside the owning
/// organization's folder. It encodes the collision token and, when the
/// document is inactive, the archive prefix. Database and disk must never
/// disagree on it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: i64,
    /// The owning organization.
    pub organization_id: i64,
    /// Current on-disk file name.
    pub stored_name: String,
    /// File format, derived from the upload's extension at creation.
    pub format: DocumentFormat,
    /// Inbound or outbound.
    pub category: DocumentCategory,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Whether the document is active.
    pub is_active: bool,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    /// The owning organization.
    pub organization_id: i64,
    /// On-disk file name returned by the file store.
    pub stored_name: String,
    /// Derived file format.
    pub format: DocumentFormat,
    /// Inbound or outbound.
    pub category: DocumentCategory,
    /// Optional free-text description.
    pub description: Option<String>,
}
