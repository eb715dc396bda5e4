//! Document lifecycle operations and the filter query.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{error, info};

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_database::repositories::document::{DocumentFilter, DocumentRepository};
use dochub_database::repositories::organization::OrganizationRepository;
use dochub_entity::document::{Document, DocumentCategory, DocumentFormat, NewDocument};
use dochub_entity::organization::Organization;
use dochub_storage::directory::DirectoryStore;
use dochub_storage::file::FileStore;

/// Request to register a new document.
#[derive(Debug, Clone)]
pub struct CreateDocumentRequest {
    /// The owning organization.
    pub organization_id: i64,
    /// Caller-supplied display name. Informational only; the stored name
    /// returned by the file store is the filesystem key.
    pub name: String,
    /// Inbound or outbound.
    pub category: DocumentCategory,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Original filename of the upload.
    pub file_name: String,
    /// Uploaded file contents.
    pub data: Bytes,
}

/// Filter criteria for the document lookup, as received from the caller.
///
/// The category arrives as free-form input and is validated here, once; an
/// absent or unrecognized value fails `InvalidCategory`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FilterDocumentsRequest {
    /// Scope: the owning organization.
    pub organization_id: i64,
    /// Optional case-insensitive substring match on the stored name.
    pub name: Option<String>,
    /// Optional inclusive lower bound on creation time.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional inclusive upper bound on creation time.
    pub end_date: Option<DateTime<Utc>>,
    /// Document category (GELEN/GIDEN), required.
    #[serde(default)]
    pub category: Option<String>,
}

/// Owns the document state machine: active/inactive with permanent
/// deletion as a terminal transition from either state.
///
/// `stored_name` and the physical file are updated in lockstep: the file
/// rename comes first, the relational commit second, and a failed commit
/// reverses the rename.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Organization repository, for folder resolution.
    organization_repo: Arc<OrganizationRepository>,
    /// Folder store under the uploads root.
    directories: Arc<DirectoryStore>,
    /// File store for the document files themselves.
    files: Arc<FileStore>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        organization_repo: Arc<OrganizationRepository>,
        directories: Arc<DirectoryStore>,
        files: Arc<FileStore>,
    ) -> Self {
        Self {
            document_repo,
            organization_repo,
            directories,
            files,
        }
    }

    /// Registers a new document: stores the uploaded file inside the owning
    /// organization's folder, then persists the record.
    ///
    /// Filename validation runs before anything is written, so a rejected
    /// upload leaves neither an orphan row nor an orphan file.
    pub async fn create(&self, req: CreateDocumentRequest) -> AppResult<Document> {
        let organization = self.load_organization(req.organization_id).await?;

        let folder = PathBuf::from(&organization.folder_path);
        if !folder.is_dir() {
            return Err(AppError::new(
                ErrorKind::OrganizationFolderNotFound,
                format!(
                    "Organization folder not found: {}. Please add the organization first",
                    folder.display()
                ),
            ));
        }

        let format = DocumentFormat::from_filename(&req.file_name)?;
        let stored_name = self.files.store(&folder, &req.file_name, req.data).await?;

        let record = NewDocument {
            organization_id: organization.id,
            stored_name: stored_name.clone(),
            format,
            category: req.category,
            description: req.description,
        };
        let document = match self.document_repo.insert(&record).await {
            Ok(document) => document,
            Err(e) => {
                if let Err(reversal) = self.files.remove(&folder, &stored_name).await {
                    error!(
                        stored_name = %stored_name,
                        error = %reversal,
                        "Failed to reverse file store after insert failure; manual repair required"
                    );
                }
                return Err(e);
            }
        };

        info!(
            document_id = document.id,
            organization_id = organization.id,
            stored_name = %document.stored_name,
            format = %document.format,
            "Document created"
        );
        Ok(document)
    }

    /// Deactivates a document, archiving its file.
    pub async fn deactivate(&self, id: i64) -> AppResult<i64> {
        let document = self.load(id).await?;
        if !document.is_active {
            return Err(AppError::new(
                ErrorKind::AlreadyInactive,
                "Document is already inactive",
            ));
        }

        let folder = self.resolve_folder(document.organization_id).await?;
        let new_name = self.files.archive(&folder, &document.stored_name).await?;

        if let Err(e) = self
            .document_repo
            .set_stored_name_and_active(id, &new_name, false)
            .await
        {
            // Reversal of archive is restore; skipped when the forward step
            // was itself a no-op.
            if new_name != document.stored_name {
                if let Err(reversal) = self.files.restore(&folder, &new_name).await {
                    error!(
                        stored_name = %new_name,
                        error = %reversal,
                        "Failed to reverse file archive after commit failure; manual repair required"
                    );
                }
            }
            return Err(e);
        }

        info!(document_id = id, stored_name = %new_name, "Document deactivated");
        Ok(id)
    }

    /// Activates a document, restoring its file name.
    ///
    /// A stored name that unexpectedly lacks the archive prefix surfaces as
    /// a `NotArchived` consistency failure.
    pub async fn activate(&self, id: i64) -> AppResult<i64> {
        let document = self.load(id).await?;
        if document.is_active {
            return Err(AppError::new(
                ErrorKind::AlreadyActive,
                "Document is already active",
            ));
        }

        let folder = self.resolve_folder(document.organization_id).await?;
        let new_name = self.files.restore(&folder, &document.stored_name).await?;

        if let Err(e) = self
            .document_repo
            .set_stored_name_and_active(id, &new_name, true)
            .await
        {
            if let Err(reversal) = self.files.archive(&folder, &new_name).await {
                error!(
                    stored_name = %new_name,
                    error = %reversal,
                    "Failed to reverse file restore after commit failure; manual repair required"
                );
            }
            return Err(e);
        }

        info!(document_id = id, stored_name = %new_name, "Document activated");
        Ok(id)
    }

    /// Permanently deletes a document: the physical file first, then the
    /// row. A failed file removal keeps the row and surfaces the failure.
    pub async fn permanent_delete(&self, id: i64) -> AppResult<i64> {
        let document = self.load(id).await?;
        let folder = self.resolve_folder(document.organization_id).await?;

        self.delete_record(&folder, &document).await?;

        info!(document_id = id, "Document permanently deleted");
        Ok(id)
    }

    /// Permanently deletes every document of one organization in the given
    /// partition, returning how many were removed.
    ///
    /// A per-item failure aborts the remaining items and surfaces as the
    /// overall result; no partial count is reported on error.
    pub async fn bulk_delete(&self, organization_id: i64, active: bool) -> AppResult<u64> {
        self.load_organization(organization_id).await?;

        let documents = self
            .document_repo
            .find_by_organization_and_active(organization_id, active)
            .await?;
        if documents.is_empty() {
            return Ok(0);
        }

        let folder = self.resolve_folder(organization_id).await?;
        let mut removed = 0u64;
        for document in &documents {
            self.delete_record(&folder, document).await?;
            removed += 1;
        }

        info!(
            organization_id,
            active, removed, "Bulk-deleted documents for organization"
        );
        Ok(removed)
    }

    /// Runs the paged filter query over one organization's documents.
    ///
    /// No match is an empty page, not an error.
    pub async fn filter(
        &self,
        req: &FilterDocumentsRequest,
        active: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        let category: DocumentCategory = req.category.as_deref().unwrap_or("").parse()?;

        let filter = DocumentFilter {
            organization_id: req.organization_id,
            active,
            name_pattern: req.name.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            category,
        };
        self.document_repo.filter(&filter, page).await
    }

    async fn delete_record(&self, folder: &Path, document: &Document) -> AppResult<()> {
        self.files.remove(folder, &document.stored_name).await?;
        if let Err(e) = self.document_repo.delete(document.id).await {
            error!(
                document_id = document.id,
                stored_name = %document.stored_name,
                error = %e,
                "Row delete failed after file removal; manual repair required"
            );
            return Err(e);
        }
        Ok(())
    }

    async fn load(&self, id: i64) -> AppResult<Document> {
        self.document_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    async fn load_organization(&self, id: i64) -> AppResult<Organization> {
        self.organization_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Organization {id} not found")))
    }

    /// Resolve the owning organization's folder, tolerating a stale
    /// recorded path via the archive fallback.
    async fn resolve_folder(&self, organization_id: i64) -> AppResult<PathBuf> {
        let organization = self.load_organization(organization_id).await?;
        self.directories
            .locate(Path::new(&organization.folder_path))
            .await
    }
}
