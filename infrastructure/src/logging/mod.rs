//! Transcript logging
//!
//! [`JsonlConversationLogger`] appends council events to a JSONL file and
//! implements the [`ConversationLogger`](council_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
