//! Unified application error types for DocHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// The lifecycle kinds are deliberately fine-grained: a caller that is told
/// `HasInactiveDocuments` knows exactly which precondition blocked the
/// operation, without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested record was not found.
    NotFound,
    /// An active organization with the same name already exists.
    DuplicateActiveName,
    /// An inactive organization with the same name already exists.
    DuplicateInactiveName,
    /// A rename to the name the record already carries.
    DuplicateName,
    /// The record is already active.
    AlreadyActive,
    /// The record is already inactive.
    AlreadyInactive,
    /// Creating a folder on disk failed.
    FolderCreateFailed,
    /// Renaming or removing a folder on disk failed.
    FolderRenameFailed,
    /// The folder does not exist, in plain or archived form.
    FolderNotFound,
    /// The folder still contains entries.
    FolderNotEmpty,
    /// The owning organization's folder is missing on disk.
    OrganizationFolderNotFound,
    /// Writing a file to disk failed.
    FileWriteFailed,
    /// Renaming a file on disk failed.
    FileRenameFailed,
    /// Deleting a file from disk failed, or the file was missing.
    FileDeleteFailed,
    /// The file does not exist or is not readable.
    FileNotFound,
    /// The uploaded filename has no recognized extension.
    InvalidExtension,
    /// The uploaded filename is empty.
    EmptyFilename,
    /// The document category is missing or not one of the known values.
    InvalidCategory,
    /// The organization still owns active documents.
    HasActiveDocuments,
    /// The organization still owns inactive documents.
    HasInactiveDocuments,
    /// A name expected to carry the archive prefix does not.
    NotArchived,
    /// Input validation failed.
    Validation,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::DuplicateActiveName => write!(f, "DUPLICATE_ACTIVE_NAME"),
            Self::DuplicateInactiveName => write!(f, "DUPLICATE_INACTIVE_NAME"),
            Self::DuplicateName => write!(f, "DUPLICATE_NAME"),
            Self::AlreadyActive => write!(f, "ALREADY_ACTIVE"),
            Self::AlreadyInactive => write!(f, "ALREADY_INACTIVE"),
            Self::FolderCreateFailed => write!(f, "FOLDER_CREATE_FAILED"),
            Self::FolderRenameFailed => write!(f, "FOLDER_RENAME_FAILED"),
            Self::FolderNotFound => write!(f, "FOLDER_NOT_FOUND"),
            Self::FolderNotEmpty => write!(f, "FOLDER_NOT_EMPTY"),
            Self::OrganizationFolderNotFound => write!(f, "ORGANIZATION_FOLDER_NOT_FOUND"),
            Self::FileWriteFailed => write!(f, "FILE_WRITE_FAILED"),
            Self::FileRenameFailed => write!(f, "FILE_RENAME_FAILED"),
            Self::FileDeleteFailed => write!(f, "FILE_DELETE_FAILED"),
            Self::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            Self::InvalidExtension => write!(f, "INVALID_EXTENSION"),
            Self::EmptyFilename => write!(f, "EMPTY_FILENAME"),
            Self::InvalidCategory => write!(f, "INVALID_CATEGORY"),
            Self::HasActiveDocuments => write!(f, "HAS_ACTIVE_DOCUMENTS"),
            Self::HasInactiveDocuments => write!(f, "HAS_INACTIVE_DOCUMENTS"),
            Self::NotArchived => write!(f, "NOT_ARCHIVED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout DocHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
