//! # dochub-storage
//!
//! Filesystem side of the lifecycle engine: the archive naming policy and
//! the stores that create, rename, inspect, and remove organization folders
//! and document files under the configured uploads root.
//!
//! All archive-prefix logic lives in [`naming`]; the stores never inspect
//! or compose the prefix themselves.

pub mod directory;
pub mod file;
pub mod naming;

pub use directory::DirectoryStore;
pub use file::{ByteStream, FileStore};
