//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the local model a council member is backed by
//! - [`topic::Topic`]: a validated subject to pose to the council
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod topic;
