//! Check Connection use case
//!
//! Probes the inference endpoint for its loaded models and compares them
//! with the models the council needs.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use council_domain::{CouncilRegistry, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CheckConnectionError {
    #[error("Inference endpoint unavailable: {0}")]
    EndpointUnavailable(#[source] GatewayError),
}

/// Outcome of a successful probe
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionReport {
    /// Models the endpoint reports as loaded
    pub loaded: Vec<Model>,
    /// Council models the endpoint does not report
    pub missing: Vec<Model>,
}

impl ConnectionReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub struct CheckConnectionUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    registry: Arc<CouncilRegistry>,
}

impl<G: LlmGateway + 'static> CheckConnectionUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: Arc<CouncilRegistry>) -> Self {
        Self { gateway, registry }
    }

    pub async fn execute(&self) -> Result<ConnectionReport, CheckConnectionError> {
        let loaded = self
            .gateway
            .available_models()
            .await
            .map_err(CheckConnectionError::EndpointUnavailable)?;
        info!("Endpoint reports {} loaded models", loaded.len());

        let mut missing: Vec<Model> = Vec::new();
        for model in self.registry.models() {
            if !loaded.contains(model) && !missing.contains(model) {
                warn!("Council model {} is not loaded", model);
                missing.push(model.clone());
            }
        }

        Ok(ConnectionReport { loaded, missing })
    }
}
