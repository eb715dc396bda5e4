//! Document file store.
//!
//! Stores, renames, and removes individual document files inside an
//! organization folder resolved by the [`DirectoryStore`](crate::DirectoryStore).

use std::path::Path;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::document::DocumentFormat;

use crate::naming;

/// Streamed file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// Store for document files inside organization folders.
#[derive(Debug, Clone, Default)]
pub struct FileStore;

impl FileStore {
    /// Create a new file store.
    pub fn new() -> Self {
        Self
    }

    /// Write an uploaded file into `dir` under a collision-safe stored name.
    ///
    /// The filename is validated (non-empty, recognized extension) before
    /// anything touches the disk. The stored name is composed as
    /// `token_originalname`; a name collision overwrites, which the random
    /// token makes practically impossible.
    pub async fn store(
        &self,
        dir: &Path,
        original_filename: &str,
        data: Bytes,
    ) -> AppResult<String> {
        DocumentFormat::from_filename(original_filename)?;

        let token = Uuid::new_v4().simple().to_string();
        let stored_name = format!("{token}_{}", original_filename.trim());
        let path = dir.join(&stored_name);

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FileWriteFailed,
                format!("Failed to store file: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored document file");
        Ok(stored_name)
    }

    /// Rename a stored file to its archived form and return the new name.
    ///
    /// A name already in archived form is left untouched and returned as-is;
    /// the filesystem already matches the target state.
    pub async fn archive(&self, dir: &Path, stored_name: &str) -> AppResult<String> {
        let new_name = naming::archive(stored_name);
        if new_name != stored_name {
            self.rename(dir, stored_name, &new_name).await?;
        }
        Ok(new_name)
    }

    /// Rename an archived file back to its plain form and return the new name.
    ///
    /// Fails with `NotArchived` when the stored name unexpectedly lacks the
    /// prefix.
    pub async fn restore(&self, dir: &Path, stored_name: &str) -> AppResult<String> {
        let new_name = naming::restore(stored_name)?;
        self.rename(dir, stored_name, &new_name).await?;
        Ok(new_name)
    }

    /// Delete a stored file. A missing file is a failure, not a no-op.
    pub async fn remove(&self, dir: &Path, stored_name: &str) -> AppResult<()> {
        let path = dir.join(stored_name);
        fs::remove_file(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FileDeleteFailed,
                format!("Failed to delete file: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), "Deleted document file");
        Ok(())
    }

    /// Open a stored file for reading, returning its byte stream and length.
    pub async fn open(&self, dir: &Path, stored_name: &str) -> AppResult<(ByteStream, u64)> {
        let path = dir.join(stored_name);
        let file = fs::File::open(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FileNotFound,
                format!("File not found or not readable: {}", path.display()),
                e,
            )
        })?;
        let len = file
            .metadata()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::FileNotFound,
                    format!("Failed to read file metadata: {}", path.display()),
                    e,
                )
            })?
            .len();

        Ok((Box::pin(ReaderStream::new(file)), len))
    }

    async fn rename(&self, dir: &Path, from: &str, to: &str) -> AppResult<()> {
        let from_path = dir.join(from);
        let to_path = dir.join(to);
        fs::rename(&from_path, &to_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FileRenameFailed,
                format!(
                    "Failed to rename file {} -> {}",
                    from_path.display(),
                    to_path.display()
                ),
                e,
            )
        })?;

        debug!(from = %from_path.display(), to = %to_path.display(), "Renamed document file");
        Ok(())
    }
}
