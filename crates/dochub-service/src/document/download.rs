//! Document download.

use std::path::Path;
use std::sync::Arc;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::organization::OrganizationRepository;
use dochub_storage::directory::DirectoryStore;
use dochub_storage::file::{ByteStream, FileStore};

/// An opened document ready to be streamed to the caller.
pub struct DownloadedDocument {
    /// The file contents.
    pub stream: ByteStream,
    /// Filename for the content-disposition header.
    pub filename: String,
    /// Content length in bytes.
    pub length: u64,
    /// MIME type derived from the document's format.
    pub content_type: &'static str,
}

impl std::fmt::Debug for DownloadedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadedDocument")
            .field("stream", &"<byte stream>")
            .field("filename", &self.filename)
            .field("length", &self.length)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Opens stored document files for download.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Organization repository, for folder resolution.
    organization_repo: Arc<OrganizationRepository>,
    /// Folder store under the uploads root.
    directories: Arc<DirectoryStore>,
    /// File store for the document files themselves.
    files: Arc<FileStore>,
}

impl DownloadService {
    /// Creates a new download service.
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

    /// Opens a document's file for streaming.
    pub async fn download(&self, id: i64) -> AppResult<DownloadedDocument> {
        let document = self
            .document_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;
        let organization = self
            .organization_repo
            .find_by_id(document.organization_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Organization {} not found",
                    document.organization_id
                ))
            })?;

        // A missing folder means the file cannot be found either; the
        // download contract only distinguishes record vs. file absence.
        let folder = self
            .directories
            .locate(Path::new(&organization.folder_path))
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorKind::FileNotFound,
                    format!("File not found: {} ({})", document.stored_name, e.message),
                )
            })?;

        let (stream, length) = self.files.open(&folder, &document.stored_name).await?;

        Ok(DownloadedDocument {
            stream,
            filename: document.stored_name,
            length,
            content_type: document.format.mime_type(),
        })
    }
}
