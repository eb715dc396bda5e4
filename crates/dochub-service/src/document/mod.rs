//! Document lifecycle.

pub mod download;
pub mod service;

pub use download::{DownloadService, DownloadedDocument};
pub use service::{CreateDocumentRequest, DocumentService, FilterDocumentsRequest};
