//! Prompt domain
//!
//! Templates for the user messages sent at each stage of a council session.

mod template;

pub use template::PromptTemplate;
