//! Repository implementations.

pub mod document;
pub mod organization;

pub use document::{DocumentFilter, DocumentRepository};
pub use organization::OrganizationRepository;
