//! LM Studio session implementation

use crate::lmstudio::error::{LmStudioError, Result};
use crate::lmstudio::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use council_application::{GatewayError, GenerationParams, LlmSession};
use council_domain::Model;
use council_domain::util::preview;
use reqwest::Client;
use tracing::{debug, warn};

/// A model bound to a system prompt
///
/// Holds no conversation state: grounding travels inside the user message.
pub struct LmStudioSession {
    client: Client,
    url: String,
    model: Model,
    system_prompt: String,
    params: GenerationParams,
}

impl LmStudioSession {
    pub fn new(
        client: Client,
        url: String,
        model: Model,
        system_prompt: String,
        params: GenerationParams,
    ) -> Self {
        Self {
            client,
            url,
            model,
            system_prompt,
            params,
        }
    }

    fn request<'a>(&'a self, content: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(content),
            ],
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        }
    }

    async fn complete(&self, content: &str) -> Result<String> {
        let timeout = self.params.request_timeout;
        debug!(
            "POST {} model={} prompt='{}'",
            self.url,
            self.model,
            preview(content, 80)
        );

        let response = self
            .client
            .post(&self.url)
            .timeout(timeout)
            .json(&self.request(content))
            .send()
            .await
            .map_err(|e| LmStudioError::from_reqwest(e, &self.url, timeout.as_secs()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LmStudioError::from_reqwest(e, &self.url, timeout.as_secs()))?;

        if !status.is_success() {
            warn!("{} returned HTTP {}", self.model, status);
            return Err(LmStudioError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| LmStudioError::ParseError {
            error: e.to_string(),
            raw: body.to_string(),
        })?;
    parsed.into_first_content().ok_or(LmStudioError::NoChoices)
}

#[async_trait]
impl LlmSession for LmStudioSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        Ok(self.complete(content).await?)
    }
}
