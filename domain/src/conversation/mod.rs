//! Conversation domain
//!
//! - [`turn::Turn`]: one sanitized output from one speaker
//! - [`context::ConversationContext`]: the append-only turn log of a session
//! - [`window::ContextWindow`]: how much of the log is projected into prompts

pub mod context;
pub mod turn;
pub mod window;
