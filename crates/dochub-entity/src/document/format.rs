//! Document format enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use dochub_core::error::{AppError, ErrorKind};

/// Recognized file formats, derived from the uploaded filename's extension
/// at creation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
    Txt,
    Csv,
    Png,
    Jpg,
    Jpeg,
}

impl DocumentFormat {
    /// Match an extension (without the dot) against the enumeration,
    /// case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "xls" => Some(Self::Xls),
            "xlsx" => Some(Self::Xlsx),
            "ppt" => Some(Self::Ppt),
            "pptx" => Some(Self::Pptx),
            "txt" => Some(Self::Txt),
            "csv" => Some(Self::Csv),
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Derive the format from an uploaded filename.
    ///
    /// Fails with `EmptyFilename` when the name is blank and with
    /// `InvalidExtension` when the extension is missing, trailing, or not
    /// part of the enumeration. Callers rely on this running before any
    /// disk or database write.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let trimmed = filename.trim();
        if trimmed.is_empty() {
            return Err(AppError::new(ErrorKind::EmptyFilename, "File name is empty"));
        }
        let (stem, ext) = match trimmed.rsplit_once('.') {
            Some(parts) => parts,
            None => {
                return Err(AppError::new(
                    ErrorKind::InvalidExtension,
                    format!("File '{trimmed}' does not have an extension"),
                ));
            }
        };
        if stem.is_empty() || ext.is_empty() {
            return Err(AppError::new(
                ErrorKind::InvalidExtension,
                format!("File '{trimmed}' does not have a valid extension"),
            ));
        }
        Self::from_extension(ext).ok_or_else(|| {
            AppError::new(
                ErrorKind::InvalidExtension,
                format!("Unsupported file format: {}", ext.to_uppercase()),
            )
        })
    }

    /// MIME type served when the file is downloaded.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Ppt => "application/vnd.ms-powerpoint",
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Txt => "text/plain",
            Self::Csv => "text/csv",
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
        }
    }

    /// The canonical string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Docx => "DOCX",
            Self::Xls => "XLS",
            Self::Xlsx => "XLSX",
            Self::Ppt => "PPT",
            Self::Pptx => "PPTX",
            Self::Txt => "TXT",
            Self::Csv => "CSV",
            Self::Png => "PNG",
            Self::Jpg => "JPG",
            Self::Jpeg => "JPEG",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
