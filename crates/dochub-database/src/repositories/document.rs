//! Document repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_entity::document::{Document, DocumentCategory, NewDocument};

/// Validated predicates for the document filter query.
///
/// Category and the active partition are mandatory; the rest are optional
/// refinements. Input strings are parsed into the closed enums before this
/// struct exists, so the query layer never re-validates.
#[derive(Debug, Clone)]
pub struct DocumentFilter {
    /// Scope: the owning organization.
    pub organization_id: i64,
    /// Which active partition to search.
    pub active: bool,
    /// Case-insensitive substring match on the stored name.
    pub name_pattern: Option<String>,
    /// Inclusive lower bound on creation time.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on creation time.
    pub end_date: Option<DateTime<Utc>>,
    /// Document category.
    pub category: DocumentCategory,
}

/// Repository for document rows.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Insert a new active document.
    pub async fn insert(&self, data: &NewDocument) -> AppResult<Document> {
        let now = Utc::now();
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents \
             (organization_id, stored_name, format, category, description, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6) RETURNING *",
        )
        .bind(data.organization_id)
        .bind(&data.stored_name)
        .bind(data.format)
        .bind(data.category)
        .bind(&data.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert document", e))
    }

    /// Update a document's stored name and active flag in lockstep.
    pub async fn set_stored_name_and_active(
        &self,
        id: i64,
        stored_name: &str,
        active: bool,
    ) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET stored_name = ?2, is_active = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(stored_name)
        .bind(active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Whether the organization owns any document in the given partition.
    pub async fn exists_by_organization_and_active(
        &self,
        organization_id: i64,
        active: bool,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE organization_id = ?1 AND is_active = ?2)",
        )
        .bind(organization_id)
        .bind(active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check owned documents", e)
        })
    }

    /// All documents of one organization in the given partition, newest first.
    pub async fn find_by_organization_and_active(
        &self,
        organization_id: i64,
        active: bool,
    ) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE organization_id = ?1 AND is_active = ?2 \
             ORDER BY id DESC",
        )
        .bind(organization_id)
        .bind(active)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Run the multi-predicate filter query, paged, ordered by descending id
    /// (ids are assigned in creation order, so newest first).
    pub async fn filter(
        &self,
        filter: &DocumentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        const PREDICATES: &str = "organization_id = ?1 AND is_active = ?2 AND category = ?3 \
             AND (?4 IS NULL OR LOWER(stored_name) LIKE '%' || LOWER(?4) || '%') \
             AND (?5 IS NULL OR created_at >= ?5) \
             AND (?6 IS NULL OR created_at <= ?6)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM documents WHERE {PREDICATES}"))
                .bind(filter.organization_id)
                .bind(filter.active)
                .bind(filter.category)
                .bind(filter.name_pattern.as_deref())
                .bind(filter.start_date)
                .bind(filter.end_date)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count documents", e)
                })?;

        let documents = sqlx::query_as::<_, Document>(&format!(
            "SELECT * FROM documents WHERE {PREDICATES} ORDER BY id DESC LIMIT ?7 OFFSET ?8"
        ))
        .bind(filter.organization_id)
        .bind(filter.active)
        .bind(filter.category)
        .bind(filter.name_pattern.as_deref())
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to filter documents", e))?;

        Ok(PageResponse::new(
            documents,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete a document row.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
