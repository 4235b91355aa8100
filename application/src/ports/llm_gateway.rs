//! LLM Gateway port
//!
//! Defines the interface for communicating with the local inference endpoint.

use async_trait::async_trait;
use council_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// None of these ever abort a council session: the use cases turn them into
/// an `Error: <cause>` turn.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// inference endpoint. Implementations (adapters) live in the infrastructure
/// layer and carry the generation parameters every request is sent with.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt (may be empty)
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Models currently loaded by the endpoint (health probe)
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// A single-model session
///
/// Sessions are stateless between sends: each `send` is one request carrying
/// the system prompt and the given user message, with no retries.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the raw response text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
