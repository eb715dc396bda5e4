//! # dochub-service
//!
//! Business logic for DocHub: the organization and document lifecycle
//! state machines, the document filter query, and downloads.
//!
//! Every mutating operation follows the same shape: consistency checks
//! against the relational store, then the filesystem mutation, then the
//! relational commit. There is no cross-system atomicity; on a commit
//! failure the filesystem step is reversed, and a failed reversal is
//! logged as a fatal inconsistency requiring manual repair.

pub mod document;
pub mod organization;
