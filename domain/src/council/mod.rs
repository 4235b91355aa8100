//! Council domain
//!
//! - [`member::CouncilMember`]: one configured model persona
//! - [`registry::CouncilRegistry`]: the immutable, ordered set of members

pub mod member;
pub mod registry;
