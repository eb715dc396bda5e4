//! Organization lifecycle operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::organization::OrganizationRepository;
use dochub_entity::organization::{NewOrganization, Organization};
use dochub_storage::directory::DirectoryStore;
use dochub_storage::naming;

/// Owns the organization state machine: active/inactive with permanent
/// deletion as a terminal transition out of either state.
///
/// Each transition renames the organization's folder so that the leaf name
/// mirrors the new state, then commits the relational row. The folder
/// mutation comes first: a crash between the two steps leaves a renamed
/// folder and a stale row, which the archive-fallback lookup tolerates.
#[derive(Debug, Clone)]
pub struct OrganizationService {
    /// Organization repository.
    organization_repo: Arc<OrganizationRepository>,
    /// Document repository, for the permanent-delete ownership guards.
    document_repo: Arc<DocumentRepository>,
    /// Folder store under the uploads root.
    directories: Arc<DirectoryStore>,
}

impl OrganizationService {
    /// Creates a new organization service.
    pub fn new(
        organization_repo: Arc<OrganizationRepository>,
        document_repo: Arc<DocumentRepository>,
        directories: Arc<DirectoryStore>,
    ) -> Self {
        Self {
            organization_repo,
            document_repo,
            directories,
        }
    }

    /// Creates a new organization together with its folder.
    ///
    /// The name must be free in both the active and the inactive partition.
    /// Folder creation runs before the insert, so a failed insert leaves no
    /// orphan row; the fresh folder is removed again on that path.
    pub async fn create(&self, name: &str) -> AppResult<Organization> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Organization name cannot be empty"));
        }

        self.check_name_free(name).await?;

        let folder = self.directories.create(name).await?;

        let record = NewOrganization {
            name: name.to_string(),
            folder_path: folder.display().to_string(),
        };
        let organization = match self.organization_repo.insert(&record).await {
            Ok(organization) => organization,
            Err(e) => {
                if let Err(reversal) = self.directories.remove(&folder).await {
                    error!(
                        folder = %folder.display(),
                        error = %reversal,
                        "Failed to reverse folder creation after insert failure; manual repair required"
                    );
                }
                return Err(e);
            }
        };

        info!(
            organization_id = organization.id,
            name = %organization.name,
            folder = %organization.folder_path,
            "Organization created"
        );
        Ok(organization)
    }

    /// Renames an organization and its folder.
    ///
    /// Renaming to the name the record already carries is rejected, not a
    /// no-op. The folder keeps its archive-prefix state: an inactive
    /// organization's folder is renamed to the archived form of the new
    /// name.
    pub async fn update(&self, id: i64, new_name: &str) -> AppResult<Organization> {
        let organization = self.load(id).await?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Organization name cannot be empty"));
        }
        if organization.name == new_name {
            return Err(AppError::new(
                ErrorKind::DuplicateName,
                format!(
                    "Organization is already named '{new_name}'. Please provide a different name"
                ),
            ));
        }
        self.check_name_free(new_name).await?;

        let old_path = PathBuf::from(&organization.folder_path);
        let old_leaf = leaf_name(&old_path)?;
        let new_leaf = if organization.is_active {
            new_name.to_string()
        } else {
            naming::archive(new_name)
        };

        let new_path = self.directories.rename(&old_path, &new_leaf).await?;

        let updated = match self
            .organization_repo
            .update_name_and_path(id, new_name, &new_path.display().to_string())
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(reversal) = self.directories.rename(&new_path, &old_leaf).await {
                    error!(
                        folder = %new_path.display(),
                        error = %reversal,
                        "Failed to reverse folder rename after update failure; manual repair required"
                    );
                }
                return Err(e);
            }
        };

        info!(
            organization_id = id,
            new_name = %new_name,
            folder = %updated.folder_path,
            "Organization renamed"
        );
        Ok(updated)
    }

    /// Deactivates an organization, archiving its folder.
    pub async fn deactivate(&self, id: i64) -> AppResult<i64> {
        let organization = self.load(id).await?;
        if !organization.is_active {
            return Err(AppError::new(
                ErrorKind::AlreadyInactive,
                "Organization is already inactive",
            ));
        }

        let old_path = PathBuf::from(&organization.folder_path);
        let old_leaf = leaf_name(&old_path)?;
        let new_leaf = naming::archive(&old_leaf);

        // A leaf already in archived form means disk and database drifted
        // earlier; the filesystem already matches the target state.
        let new_path = if new_leaf == old_leaf {
            old_path.clone()
        } else {
            self.directories.rename(&old_path, &new_leaf).await?
        };

        if let Err(e) = self
            .organization_repo
            .set_active(id, false, &new_path.display().to_string())
            .await
        {
            self.reverse_rename(&new_path, &old_leaf, new_leaf != old_leaf)
                .await;
            return Err(e);
        }

        info!(organization_id = id, "Organization deactivated");
        Ok(id)
    }

    /// Activates an organization, restoring its folder name.
    pub async fn activate(&self, id: i64) -> AppResult<i64> {
        let organization = self.load(id).await?;
        if organization.is_active {
            return Err(AppError::new(
                ErrorKind::AlreadyActive,
                "Organization is already active",
            ));
        }

        let old_path = PathBuf::from(&organization.folder_path);
        let old_leaf = leaf_name(&old_path)?;

        let (new_path, renamed) = if naming::is_archived(&old_leaf) {
            let restored_leaf = naming::restore(&old_leaf)?;
            (self.directories.rename(&old_path, &restored_leaf).await?, true)
        } else {
            // Prior drift: the folder name already matches the target state.
            (old_path.clone(), false)
        };

        if let Err(e) = self
            .organization_repo
            .set_active(id, true, &new_path.display().to_string())
            .await
        {
            self.reverse_rename(&new_path, &old_leaf, renamed).await;
            return Err(e);
        }

        info!(organization_id = id, "Organization activated");
        Ok(id)
    }

    /// Permanently deletes an organization and its folder.
    ///
    /// Blocked while any document, active or inactive, still references the
    /// organization, and while the folder has contents. The folder is
    /// resolved with the archive fallback, so a stale recorded path does
    /// not make deletion impossible.
    pub async fn permanent_delete(&self, id: i64) -> AppResult<i64> {
        let organization = self.load(id).await?;

        if self
            .document_repo
            .exists_by_organization_and_active(id, true)
            .await?
        {
            return Err(AppError::new(
                ErrorKind::HasActiveDocuments,
                "Organization still owns active documents",
            ));
        }
        if self
            .document_repo
            .exists_by_organization_and_active(id, false)
            .await?
        {
            return Err(AppError::new(
                ErrorKind::HasInactiveDocuments,
                "Organization still owns inactive documents",
            ));
        }

        let folder = self
            .directories
            .locate(Path::new(&organization.folder_path))
            .await?;
        if !self.directories.is_empty(&folder).await? {
            return Err(AppError::new(
                ErrorKind::FolderNotEmpty,
                format!("Folder is not empty: {}", folder.display()),
            ));
        }

        self.directories.remove(&folder).await?;

        if let Err(e) = self.organization_repo.delete(id).await {
            // The folder was verified empty, so it can be recreated as the
            // reversal of its removal.
            let leaf = leaf_name(&folder)?;
            if let Err(reversal) = self.directories.create(&leaf).await {
                error!(
                    folder = %folder.display(),
                    error = %reversal,
                    "Failed to reverse folder removal after delete failure; manual repair required"
                );
            }
            return Err(e);
        }

        info!(organization_id = id, name = %organization.name, "Organization permanently deleted");
        Ok(id)
    }

    /// Lists one active partition, paged.
    pub async fn list(
        &self,
        active: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Organization>> {
        self.organization_repo.list_by_active(active, page).await
    }

    /// Finds an organization by name within one active partition.
    pub async fn get_by_name(&self, name: &str, active: bool) -> AppResult<Organization> {
        self.organization_repo
            .find_by_name_and_active(name, active)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Organization '{name}' not found")))
    }

    async fn load(&self, id: i64) -> AppResult<Organization> {
        self.organization_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Organization {id} not found")))
    }

    async fn check_name_free(&self, name: &str) -> AppResult<()> {
        if self
            .organization_repo
            .exists_by_name_and_active(name, true)
            .await?
        {
            return Err(AppError::new(
                ErrorKind::DuplicateActiveName,
                format!("Active organization with name '{name}' already exists"),
            ));
        }
        if self
            .organization_repo
            .exists_by_name_and_active(name, false)
            .await?
        {
            return Err(AppError::new(
                ErrorKind::DuplicateInactiveName,
                format!("Inactive organization with name '{name}' already exists"),
            ));
        }
        Ok(())
    }

    /// Undo a folder rename after a failed relational commit. `renamed`
    /// records whether a rename actually happened on the forward path.
    async fn reverse_rename(&self, current: &Path, previous_leaf: &str, renamed: bool) {
        if !renamed {
            return;
        }
        if let Err(reversal) = self.directories.rename(current, previous_leaf).await {
            error!(
                folder = %current.display(),
                error = %reversal,
                "Failed to reverse folder rename after commit failure; manual repair required"
            );
        }
    }
}

/// Leaf name of a folder path.
fn leaf_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            AppError::internal(format!("Folder path has no leaf name: {}", path.display()))
        })
}
