//! Organization entity.

pub mod model;

pub use model::{NewOrganization, Organization};
