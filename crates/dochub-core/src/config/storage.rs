//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Filesystem storage configuration.
///
/// The uploads root is resolved once at startup and injected read-only into
/// the directory and file stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one folder per organization.
    #[serde(default = "default_uploads_root")]
    pub uploads_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_root: default_uploads_root(),
        }
    }
}

fn default_uploads_root() -> String {
    "./uploads".to_string()
}
