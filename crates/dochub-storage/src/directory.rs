//! Organization folder store.
//!
//! Creates, renames, inspects, and removes the per-organization folders
//! living directly under the configured uploads root.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;

use crate::naming;

/// Store for organization folders under a fixed uploads root.
///
/// The root is resolved once at startup from configuration and injected
/// here; it is read-only for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    /// Root directory holding one folder per organization.
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a new directory store rooted at the given path, creating the
    /// root itself if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderCreateFailed,
                format!("Failed to create uploads root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The uploads root this store operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a folder named `name` under the root and return its path.
    pub async fn create(&self, name: &str) -> AppResult<PathBuf> {
        let path = self.root.join(name);
        if path.exists() && !path.is_dir() {
            return Err(AppError::new(
                ErrorKind::FolderCreateFailed,
                format!("Path exists and is not a directory: {}", path.display()),
            ));
        }
        fs::create_dir_all(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderCreateFailed,
                format!("Failed to create folder: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), "Created organization folder");
        Ok(path)
    }

    /// Rename a folder in place, keeping its parent, and return the new path.
    pub async fn rename(&self, old_path: &Path, new_name: &str) -> AppResult<PathBuf> {
        let parent = old_path.parent().ok_or_else(|| {
            AppError::new(
                ErrorKind::FolderRenameFailed,
                format!("Folder has no parent: {}", old_path.display()),
            )
        })?;
        let new_path = parent.join(new_name);

        fs::rename(old_path, &new_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderRenameFailed,
                format!(
                    "Failed to rename folder {} -> {}",
                    old_path.display(),
                    new_path.display()
                ),
                e,
            )
        })?;

        debug!(
            from = %old_path.display(),
            to = %new_path.display(),
            "Renamed organization folder"
        );
        Ok(new_path)
    }

    /// Whether the directory exists and has zero entries at the top level.
    pub async fn is_empty(&self, path: &Path) -> AppResult<bool> {
        if !path.is_dir() {
            return Err(AppError::new(
                ErrorKind::FolderNotFound,
                format!("Folder not found: {}", path.display()),
            ));
        }
        let mut dir = fs::read_dir(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderNotFound,
                format!("Failed to read folder: {}", path.display()),
                e,
            )
        })?;
        let first = dir.next_entry().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderNotFound,
                format!("Failed to read folder entry: {}", path.display()),
                e,
            )
        })?;
        Ok(first.is_none())
    }

    /// Remove an empty directory.
    ///
    /// Callers verify emptiness via [`Self::is_empty`] first; a non-empty
    /// directory makes the underlying remove fail and surfaces here as an
    /// I/O cause. The failure kind is shared with rename; there is no
    /// dedicated delete kind.
    pub async fn remove(&self, path: &Path) -> AppResult<()> {
        fs::remove_dir(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::FolderRenameFailed,
                format!("Failed to remove folder: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), "Removed organization folder");
        Ok(())
    }

    /// Resolve "the" folder for a recorded path that may be stale.
    ///
    /// Tries the path as recorded; if absent, tries the archived variant of
    /// its leaf name under the same parent; otherwise fails with
    /// `FolderNotFound`. The fallback covers a rename that was applied on
    /// disk but never recorded — it never writes the corrected path back.
    pub async fn locate(&self, folder_path: &Path) -> AppResult<PathBuf> {
        if folder_path.is_dir() {
            return Ok(folder_path.to_path_buf());
        }

        if let (Some(parent), Some(leaf)) = (folder_path.parent(), folder_path.file_name()) {
            let archived = parent.join(naming::archive(&leaf.to_string_lossy()));
            if archived.is_dir() {
                return Ok(archived);
            }
        }

        Err(AppError::new(
            ErrorKind::FolderNotFound,
            format!(
                "Folder not found in plain or archived form: {}",
                folder_path.display()
            ),
        ))
    }
}
