//! LM Studio adapter
//!
//! Talks to a local OpenAI-compatible server (LM Studio by default) over
//! HTTP. One request per [`LlmSession::send`](council_application::LlmSession::send),
//! no retries.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

/// Default base URL of a local LM Studio server
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234";
