//! Domain layer for local-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is a fixed, ordered group of [`CouncilMember`]s, each backed by a
//! local model. The registration order of the [`CouncilRegistry`] is the turn
//! order of every mode.
//!
//! ## Conversation
//!
//! Every model call produces exactly one [`Turn`]. Turns are appended to a
//! [`ConversationContext`], an append-only log that is projected into prompt
//! text at call time (optionally through a [`ContextWindow`]).
//!
//! ## Modes
//!
//! - **Debate**: initial responses, cross-examination, conclusion
//! - **Teach**: every member answers once, each seeing the previous answers
//! - **Ask-One**: a single chosen member answers

pub mod conversation;
pub mod core;
pub mod council;
pub mod orchestration;
pub mod prompt;
pub mod response;
pub mod util;

// Re-export commonly used types
pub use conversation::{context::ConversationContext, turn::Turn, window::ContextWindow};
pub use core::{error::DomainError, model::Model, topic::Topic};
pub use council::{
    member::{CouncilMember, PresentationTag},
    registry::CouncilRegistry,
};
pub use orchestration::{mode::SessionMode, phase::Phase, session::Session};
pub use prompt::PromptTemplate;
pub use response::sanitizer::{ResponseSanitizer, Sanitized, TRUNCATED_REASONING_NOTICE};
