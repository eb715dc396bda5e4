//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client organization owning one on-disk folder and its documents.
///
/// `folder_path` mirrors `is_active`: the folder's leaf name carries the
/// archive prefix exactly when the organization is inactive. The two are
/// updated in lockstep by the lifecycle service; nothing else may touch
/// either.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    /// Unique organization identifier.
    pub id: i64,
    /// Display name; unique within the active set and within the inactive set.
    pub name: String,
    /// Absolute path of the organization's folder.
    pub folder_path: String,
    /// Whether the organization is active.
    pub is_active: bool,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrganization {
    /// Display name.
    pub name: String,
    /// Absolute path of the freshly created folder.
    pub folder_path: String,
}
