//! Document category enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dochub_core::error::{AppError, ErrorKind};

/// Direction of a registered document: inbound (`GELEN`) or outbound
/// (`GIDEN`).
///
/// Free-form input is validated against this enumeration exactly once, at
/// the request boundary; everything downstream carries the closed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum DocumentCategory {
    /// An incoming document.
    Gelen,
    /// An outgoing document.
    Giden,
}

impl DocumentCategory {
    /// The canonical string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gelen => "GELEN",
            Self::Giden => "GIDEN",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::new(
                ErrorKind::InvalidCategory,
                "Document category must be provided (GELEN/GIDEN)",
            ));
        }
        match trimmed.to_uppercase().as_str() {
            "GELEN" => Ok(Self::Gelen),
            "GIDEN" => Ok(Self::Giden),
            other => Err(AppError::new(
                ErrorKind::InvalidCategory,
                format!("Invalid document category '{other}'. Must be GELEN or GIDEN"),
            )),
        }
    }
}
