//! Lifecycle integration tests: real SQLite database, real tempdir uploads
//! root, full service stack.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use sqlx::SqlitePool;

use dochub_core::config::database::DatabaseConfig;
use dochub_core::error::ErrorKind;
use dochub_core::types::pagination::PageRequest;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::organization::OrganizationRepository;
use dochub_database::{connection, migration};
use dochub_entity::document::{DocumentCategory, DocumentFormat};
use dochub_service::document::download::DownloadService;
use dochub_service::document::service::{
    CreateDocumentRequest, DocumentService, FilterDocumentsRequest,
};
use dochub_service::organization::service::OrganizationService;
use dochub_storage::directory::DirectoryStore;
use dochub_storage::file::FileStore;

struct TestContext {
    _uploads: tempfile::TempDir,
    _db_dir: tempfile::TempDir,
    uploads_root: PathBuf,
    pool: SqlitePool,
    organizations: OrganizationService,
    documents: DocumentService,
    downloads: DownloadService,
}

async fn setup() -> TestContext {
    let uploads = tempfile::tempdir().unwrap();
    let db_dir = tempfile::tempdir().unwrap();

    let config = DatabaseConfig {
        url: db_dir.path().join("test.db").display().to_string(),
        ..Default::default()
    };
    let pool = connection::create_pool(&config).await.unwrap();
    migration::run_migrations(&pool).await.unwrap();

    let organization_repo = Arc::new(OrganizationRepository::new(pool.clone()));
    let document_repo = Arc::new(DocumentRepository::new(pool.clone()));
    let directories = Arc::new(
        DirectoryStore::new(uploads.path().to_str().unwrap())
            .await
            .unwrap(),
    );
    let files = Arc::new(FileStore::new());

    let organizations = OrganizationService::new(
        Arc::clone(&organization_repo),
        Arc::clone(&document_repo),
        Arc::clone(&directories),
    );
    let documents = DocumentService::new(
        Arc::clone(&document_repo),
        Arc::clone(&organization_repo),
        Arc::clone(&directories),
        Arc::clone(&files),
    );
    let downloads = DownloadService::new(
        Arc::clone(&document_repo),
        Arc::clone(&organization_repo),
        Arc::clone(&directories),
        Arc::clone(&files),
    );

    TestContext {
        uploads_root: uploads.path().to_path_buf(),
        _uploads: uploads,
        _db_dir: db_dir,
        pool,
        organizations,
        documents,
        downloads,
    }
}

fn upload(organization_id: i64, file_name: &str, category: DocumentCategory) -> CreateDocumentRequest {
    CreateDocumentRequest {
        organization_id,
        name: file_name.to_string(),
        category,
        description: None,
        file_name: file_name.to_string(),
        data: Bytes::from_static(b"%PDF-1.4 test contents"),
    }
}

fn filter_request(organization_id: i64, category: &str) -> FilterDocumentsRequest {
    FilterDocumentsRequest {
        organization_id,
        name: None,
        start_date: None,
        end_date: None,
        category: Some(category.to_string()),
    }
}

// ── Organization lifecycle ──────────────────────────────────────────

#[tokio::test]
async fn test_create_organization_creates_folder() {
    let ctx = setup().await;

    let organization = ctx.organizations.create("Acme").await.unwrap();
    assert!(organization.is_active);
    assert_eq!(organization.name, "Acme");
    assert_eq!(
        PathBuf::from(&organization.folder_path),
        ctx.uploads_root.join("Acme")
    );
    assert!(ctx.uploads_root.join("Acme").is_dir());
}

#[tokio::test]
async fn test_duplicate_names_are_partitioned_by_state() {
    let ctx = setup().await;

    let organization = ctx.organizations.create("Acme").await.unwrap();
    let err = ctx.organizations.create("Acme").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateActiveName);

    ctx.organizations.deactivate(organization.id).await.unwrap();
    let err = ctx.organizations.create("Acme").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateInactiveName);
}

#[tokio::test]
async fn test_deactivate_then_activate_round_trips() {
    let ctx = setup().await;

    let before = ctx.organizations.create("Acme").await.unwrap();

    ctx.organizations.deactivate(before.id).await.unwrap();
    let inactive = ctx.organizations.get_by_name("Acme", false).await.unwrap();
    assert!(!inactive.is_active);
    assert_eq!(
        PathBuf::from(&inactive.folder_path),
        ctx.uploads_root.join("archived_Acme")
    );
    assert!(ctx.uploads_root.join("archived_Acme").is_dir());
    assert!(!ctx.uploads_root.join("Acme").exists());

    ctx.organizations.activate(before.id).await.unwrap();
    let after = ctx.organizations.get_by_name("Acme", true).await.unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.is_active, before.is_active);
    assert_eq!(after.folder_path, before.folder_path);
    assert!(ctx.uploads_root.join("Acme").is_dir());
}

#[tokio::test]
async fn test_repeated_state_transitions_are_rejected() {
    let ctx = setup().await;

    let organization = ctx.organizations.create("Acme").await.unwrap();
    let err = ctx.organizations.activate(organization.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyActive);

    ctx.organizations.deactivate(organization.id).await.unwrap();
    let err = ctx
        .organizations
        .deactivate(organization.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyInactive);
}

#[tokio::test]
async fn test_update_rejects_same_and_taken_names() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    ctx.organizations.create("Globex").await.unwrap();

    let err = ctx.organizations.update(acme.id, "Acme").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateName);

    let err = ctx.organizations.update(acme.id, "Globex").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateActiveName);

    let err = ctx.organizations.update(9999, "Ghost").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_renames_folder() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let updated = ctx.organizations.update(acme.id, "AcmeCo").await.unwrap();

    assert_eq!(updated.name, "AcmeCo");
    assert_eq!(
        PathBuf::from(&updated.folder_path),
        ctx.uploads_root.join("AcmeCo")
    );
    assert!(ctx.uploads_root.join("AcmeCo").is_dir());
    assert!(!ctx.uploads_root.join("Acme").exists());
}

#[tokio::test]
async fn test_update_preserves_archive_prefix_for_inactive() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    ctx.organizations.deactivate(acme.id).await.unwrap();

    let updated = ctx.organizations.update(acme.id, "AcmeCo").await.unwrap();
    assert_eq!(updated.name, "AcmeCo");
    assert!(!updated.is_active);
    assert_eq!(
        PathBuf::from(&updated.folder_path),
        ctx.uploads_root.join("archived_AcmeCo")
    );
    assert!(ctx.uploads_root.join("archived_AcmeCo").is_dir());
}

#[tokio::test]
async fn test_permanent_delete_requires_no_documents_and_empty_folder() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    let err = ctx
        .organizations
        .permanent_delete(acme.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::HasActiveDocuments);

    ctx.documents.deactivate(document.id).await.unwrap();
    let err = ctx
        .organizations
        .permanent_delete(acme.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::HasInactiveDocuments);

    ctx.documents.permanent_delete(document.id).await.unwrap();
    ctx.organizations.permanent_delete(acme.id).await.unwrap();

    assert!(!ctx.uploads_root.join("Acme").exists());
    let err = ctx.organizations.get_by_name("Acme", true).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_permanent_delete_blocks_on_stray_folder_contents() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    tokio::fs::write(ctx.uploads_root.join("Acme/stray.txt"), b"x")
        .await
        .unwrap();

    let err = ctx
        .organizations
        .permanent_delete(acme.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::FolderNotEmpty);
}

#[tokio::test]
async fn test_permanent_delete_uses_archive_fallback_for_stale_path() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();

    // Simulate drift: the folder was archived on disk but the rename was
    // never recorded.
    tokio::fs::rename(
        ctx.uploads_root.join("Acme"),
        ctx.uploads_root.join("archived_Acme"),
    )
    .await
    .unwrap();

    ctx.organizations.permanent_delete(acme.id).await.unwrap();
    assert!(!ctx.uploads_root.join("archived_Acme").exists());
}

#[tokio::test]
async fn test_permanent_delete_fails_when_folder_is_gone() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    tokio::fs::remove_dir(ctx.uploads_root.join("Acme"))
        .await
        .unwrap();

    let err = ctx
        .organizations
        .permanent_delete(acme.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::FolderNotFound);
}

#[tokio::test]
async fn test_list_organizations_by_partition() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    ctx.organizations.create("Globex").await.unwrap();
    ctx.organizations.deactivate(acme.id).await.unwrap();

    let active = ctx
        .organizations
        .list(true, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(active.total_items, 1);
    assert_eq!(active.items[0].name, "Globex");

    let inactive = ctx
        .organizations
        .list(false, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(inactive.total_items, 1);
    assert_eq!(inactive.items[0].name, "Acme");
}

// ── Document lifecycle ──────────────────────────────────────────────

#[tokio::test]
async fn test_create_document_stores_file_and_derives_format() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    assert!(document.is_active);
    assert_eq!(document.format, DocumentFormat::Pdf);
    assert_eq!(document.category, DocumentCategory::Gelen);
    assert!(document.stored_name.ends_with("_invoice.pdf"));
    assert!(
        ctx.uploads_root
            .join("Acme")
            .join(&document.stored_name)
            .is_file()
    );
}

#[tokio::test]
async fn test_create_document_for_unknown_organization_fails() {
    let ctx = setup().await;

    let err = ctx
        .documents
        .create(upload(9999, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_document_fails_when_folder_is_missing() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    tokio::fs::remove_dir(ctx.uploads_root.join("Acme"))
        .await
        .unwrap();

    let err = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::OrganizationFolderNotFound);
}

#[tokio::test]
async fn test_invalid_extension_leaves_no_orphans() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let err = ctx
        .documents
        .create(upload(acme.id, "report", DocumentCategory::Gelen))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidExtension);

    // No file was written...
    let mut entries = tokio::fs::read_dir(ctx.uploads_root.join("Acme"))
        .await
        .unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());

    // ...and no row exists.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_empty_filename_is_rejected() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let err = ctx
        .documents
        .create(upload(acme.id, "   ", DocumentCategory::Gelen))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyFilename);
}

#[tokio::test]
async fn test_document_deactivate_renames_file_in_lockstep() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();
    let original_name = document.stored_name.clone();

    ctx.documents.deactivate(document.id).await.unwrap();

    let folder = ctx.uploads_root.join("Acme");
    let archived_name = format!("archived_{original_name}");
    assert!(folder.join(&archived_name).is_file());
    assert!(!folder.join(&original_name).exists());

    let stored: String = sqlx::query_scalar("SELECT stored_name FROM documents WHERE id = ?1")
        .bind(document.id)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(stored, archived_name);

    let err = ctx.documents.deactivate(document.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyInactive);
}

#[tokio::test]
async fn test_document_round_trip_restores_original_name() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();
    let original_name = document.stored_name.clone();

    ctx.documents.deactivate(document.id).await.unwrap();
    ctx.documents.activate(document.id).await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT stored_name FROM documents WHERE id = ?1")
        .bind(document.id)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(stored, original_name);
    assert!(ctx.uploads_root.join("Acme").join(&original_name).is_file());

    let err = ctx.documents.activate(document.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyActive);
}

#[tokio::test]
async fn test_document_permanent_delete_removes_file_and_row() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    ctx.documents.permanent_delete(document.id).await.unwrap();
    assert!(
        !ctx.uploads_root
            .join("Acme")
            .join(&document.stored_name)
            .exists()
    );

    let err = ctx
        .documents
        .permanent_delete(document.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_document_permanent_delete_keeps_row_when_file_is_gone() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    tokio::fs::remove_file(ctx.uploads_root.join("Acme").join(&document.stored_name))
        .await
        .unwrap();

    let err = ctx
        .documents
        .permanent_delete(document.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::FileDeleteFailed);

    // The row survives the failed deletion.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE id = ?1")
        .bind(document.id)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_bulk_delete_is_partitioned_and_counted() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        ctx.documents
            .create(upload(acme.id, name, DocumentCategory::Gelen))
            .await
            .unwrap();
    }
    let inactive_one = ctx
        .documents
        .create(upload(acme.id, "d.pdf", DocumentCategory::Giden))
        .await
        .unwrap();
    ctx.documents.deactivate(inactive_one.id).await.unwrap();

    let removed = ctx.documents.bulk_delete(acme.id, true).await.unwrap();
    assert_eq!(removed, 3);

    // The inactive document survived the active sweep.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let removed = ctx.documents.bulk_delete(acme.id, false).await.unwrap();
    assert_eq!(removed, 1);

    // The folder is now empty and the organization deletable.
    ctx.organizations.permanent_delete(acme.id).await.unwrap();
}

#[tokio::test]
async fn test_bulk_delete_unknown_organization_fails() {
    let ctx = setup().await;
    let err = ctx.documents.bulk_delete(9999, true).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

// ── Filter and download ─────────────────────────────────────────────

#[tokio::test]
async fn test_filter_returns_active_inbound_documents_newest_first() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let first = ctx
        .documents
        .create(upload(acme.id, "one.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();
    let second = ctx
        .documents
        .create(upload(acme.id, "two.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();
    ctx.documents
        .create(upload(acme.id, "out.pdf", DocumentCategory::Giden))
        .await
        .unwrap();

    let page = ctx
        .documents
        .filter(&filter_request(acme.id, "GELEN"), true, &PageRequest::default())
        .await
        .unwrap();

    let ids: Vec<_> = page.items.iter().map(|d| d.id).collect();
    assert_eq!(ids, [second.id, first.id]);
}

#[tokio::test]
async fn test_filter_empty_organization_yields_empty_page() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let page = ctx
        .documents
        .filter(&filter_request(acme.id, "GELEN"), true, &PageRequest::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
}

#[tokio::test]
async fn test_filter_rejects_missing_or_unknown_category() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();

    let mut request = filter_request(acme.id, "SIDEWAYS");
    let err = ctx
        .documents
        .filter(&request, true, &PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCategory);

    request.category = None;
    let err = ctx
        .documents
        .filter(&request, true, &PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCategory);
}

#[tokio::test]
async fn test_download_round_trips_contents() {
    use futures::StreamExt;

    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    let downloaded = ctx.downloads.download(document.id).await.unwrap();
    assert_eq!(downloaded.filename, document.stored_name);
    assert_eq!(downloaded.content_type, "application/pdf");
    assert_eq!(downloaded.length, 22);

    let mut stream = downloaded.stream;
    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(collected, b"%PDF-1.4 test contents");
}

#[tokio::test]
async fn test_download_missing_file_fails() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();

    tokio::fs::remove_file(ctx.uploads_root.join("Acme").join(&document.stored_name))
        .await
        .unwrap();

    let err = ctx.downloads.download(document.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::FileNotFound);

    let err = ctx.downloads.download(9999).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

// ── The combined scenario ───────────────────────────────────────────

#[tokio::test]
async fn test_archive_scenario_end_to_end() {
    let ctx = setup().await;

    // Create "Acme": folder exists.
    let acme = ctx.organizations.create("Acme").await.unwrap();
    assert!(ctx.uploads_root.join("Acme").is_dir());

    // Upload an inbound invoice: stored as <token>_invoice.pdf, format PDF.
    let document = ctx
        .documents
        .create(upload(acme.id, "invoice.pdf", DocumentCategory::Gelen))
        .await
        .unwrap();
    assert_eq!(document.format, DocumentFormat::Pdf);
    assert!(document.stored_name.ends_with("_invoice.pdf"));

    // Deactivate the document: file physically renamed.
    ctx.documents.deactivate(document.id).await.unwrap();
    let archived_file = format!("archived_{}", document.stored_name);
    assert!(ctx.uploads_root.join("Acme").join(&archived_file).is_file());

    // Deactivate "Acme" itself while it still owns the inactive document.
    ctx.organizations.deactivate(acme.id).await.unwrap();
    assert!(ctx.uploads_root.join("archived_Acme").is_dir());
    assert!(
        ctx.uploads_root
            .join("archived_Acme")
            .join(&archived_file)
            .is_file()
    );

    // Permanent delete is blocked by the inactive document.
    let err = ctx
        .organizations
        .permanent_delete(acme.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::HasInactiveDocuments);
}

// ── Invariant sweep ─────────────────────────────────────────────────

/// After every successful mutation, `is_active` and the archive prefix on
/// the recorded folder path must agree.
#[tokio::test]
async fn test_active_flag_and_folder_name_always_agree() {
    let ctx = setup().await;

    let acme = ctx.organizations.create("Acme").await.unwrap();
    ctx.organizations.create("Globex").await.unwrap();
    ctx.organizations.deactivate(acme.id).await.unwrap();
    ctx.organizations.activate(acme.id).await.unwrap();
    ctx.organizations.deactivate(acme.id).await.unwrap();

    let rows: Vec<(String, bool)> =
        sqlx::query_as::<_, (String, bool)>("SELECT folder_path, is_active FROM organizations")
            .fetch_all(&ctx.pool)
            .await
            .unwrap();
    assert_eq!(rows.len(), 2);
    for (folder_path, is_active) in rows {
        let leaf = Path::new(&folder_path)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert_eq!(
            leaf.starts_with("archived_"),
            !is_active,
            "folder '{leaf}' disagrees with is_active={is_active}"
        );
        // And the folder itself exists under that name.
        assert!(Path::new(&folder_path).is_dir());
    }
}
