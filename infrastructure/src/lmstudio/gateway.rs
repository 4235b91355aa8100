//! LM Studio LLM Gateway implementation

use crate::lmstudio::error::{LmStudioError, Result};
use crate::lmstudio::protocol::ModelList;
use crate::lmstudio::session::LmStudioSession;
use async_trait::async_trait;
use council_application::{GatewayError, GenerationParams, LlmGateway, LlmSession};
use council_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default bound on the health probe
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// LLM Gateway for a local OpenAI-compatible server
pub struct LmStudioGateway {
    client: Client,
    base_url: String,
    params: GenerationParams,
    health_timeout: Duration,
}

impl LmStudioGateway {
    pub fn new(base_url: impl Into<String>, params: GenerationParams) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LmStudioError::ClientBuild(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!("LmStudioGateway initialized for {}", base_url);

        Ok(Self {
            client,
            base_url,
            params,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        })
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
        format!("{}/v1/{}", base_url, path)
    }

    async fn list_models(&self) -> Result<Vec<Model>> {
        let url = Self::endpoint(&self.base_url, "models");
        debug!("Probing {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| LmStudioError::from_reqwest(e, &url, self.health_timeout.as_secs()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LmStudioError::from_reqwest(e, &url, self.health_timeout.as_secs()))?;

        if !status.is_success() {
            return Err(LmStudioError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let list: ModelList = serde_json::from_str(&body).map_err(|e| LmStudioError::ParseError {
            error: e.to_string(),
            raw: body.clone(),
        })?;

        Ok(list
            .data
            .into_iter()
            .map(|entry| Model::from_name(&entry.id))
            .collect())
    }
}

#[async_trait]
impl LlmGateway for LmStudioGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(LmStudioSession::new(
            self.client.clone(),
            Self::endpoint(&self.base_url, "chat/completions"),
            model.clone(),
            system_prompt.to_string(),
            self.params.clone(),
        )))
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        Ok(self.list_models().await?)
    }
}
