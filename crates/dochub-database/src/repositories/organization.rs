//! Organization repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_entity::organization::{NewOrganization, Organization};

/// Repository for organization rows.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: SqlitePool,
}

impl OrganizationRepository {
    /// Create a new organization repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an organization by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find organization", e)
            })
    }

    /// Find an organization by name within one active partition.
    pub async fn find_by_name_and_active(
        &self,
        name: &str,
        active: bool,
    ) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE name = ?1 AND is_active = ?2",
        )
        .bind(name)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find organization by name", e)
        })
    }

    /// Whether an organization with this name exists in the given partition.
    pub async fn exists_by_name_and_active(&self, name: &str, active: bool) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM organizations WHERE name = ?1 AND is_active = ?2)",
        )
        .bind(name)
        .bind(active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check organization name", e)
        })
    }

    /// Insert a new active organization.
    pub async fn insert(&self, data: &NewOrganization) -> AppResult<Organization> {
        let now = Utc::now();
        sqlx::query_as::<_, Organization>(
            "INSERT INTO organizations (name, folder_path, is_active, created_at, updated_at) \
             VALUES (?1, ?2, 1, ?3, ?3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.folder_path)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert organization", e)
        })
    }

    /// Update an organization's name and recorded folder path.
    pub async fn update_name_and_path(
        &self,
        id: i64,
        name: &str,
        folder_path: &str,
    ) -> AppResult<Organization> {
        sqlx::query_as::<_, Organization>(
            "UPDATE organizations SET name = ?2, folder_path = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(folder_path)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update organization", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Organization {id} not found")))
    }

    /// Flip an organization's active flag, recording the folder path that
    /// mirrors the new state.
    pub async fn set_active(
        &self,
        id: i64,
        active: bool,
        folder_path: &str,
    ) -> AppResult<Organization> {
        sqlx::query_as::<_, Organization>(
            "UPDATE organizations SET is_active = ?2, folder_path = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(active)
        .bind(folder_path)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update organization state", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Organization {id} not found")))
    }

    /// List one active partition, paged, ordered by name.
    pub async fn list_by_active(
        &self,
        active: bool,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Organization>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM organizations WHERE is_active = ?1")
                .bind(active)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count organizations", e)
                })?;

        let organizations = sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE is_active = ?1 \
             ORDER BY name ASC LIMIT ?2 OFFSET ?3",
        )
        .bind(active)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list organizations", e)
        })?;

        Ok(PageResponse::new(
            organizations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete an organization row.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete organization", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
