//! Archive naming policy.
//!
//! A record's inactive state is mirrored on disk by prefixing the leaf name
//! of its folder or file with a reserved marker. These functions are the
//! single conversion boundary for that convention: pure string mapping, no
//! I/O. Callers decide *when* to convert based on the record's `is_active`
//! flag; they never parse prefixes back out of names to infer state.

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;

/// Reserved marker prepended to the leaf name of an archived folder or file.
pub const ARCHIVE_PREFIX: &str = "archived_";

/// Return the archived form of a leaf name.
///
/// A name that already carries the prefix is returned unchanged. Lifecycle
/// callers check the record's logical state first, so reaching that branch
/// means disk and database had already drifted; the caller treats the
/// target state as satisfied.
pub fn archive(name: &str) -> String {
    if is_archived(name) {
        name.to_string()
    } else {
        format!("{ARCHIVE_PREFIX}{name}")
    }
}

/// Strip the archive prefix from a leaf name.
///
/// Fails with `NotArchived` when the prefix is absent.
pub fn restore(name: &str) -> AppResult<String> {
    name.strip_prefix(ARCHIVE_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::NotArchived,
                format!("Name '{name}' does not carry the archive prefix"),
            )
        })
}

/// Whether a leaf name carries the archive prefix.
pub fn is_archived(name: &str) -> bool {
    name.starts_with(ARCHIVE_PREFIX)
}
