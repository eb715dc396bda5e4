//! Organization lifecycle.

pub mod service;

pub use service::OrganizationService;
