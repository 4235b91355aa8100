//! Endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL of the OpenAI-compatible server
    pub url: String,
    /// Per-request timeout; overrides the generation preset when set
    pub timeout_seconds: Option<u64>,
    /// Bound on the `/v1/models` health probe
    pub health_timeout_seconds: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:1234".to_string(),
            timeout_seconds: None,
            health_timeout_seconds: 5,
        }
    }
}
