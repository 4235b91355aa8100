//! Generation configuration from TOML (`[generation]` section)

use council_application::{GenerationParams, GenerationPreset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub preset: GenerationPreset,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl FileGenerationConfig {
    /// Preset values with explicit overrides applied
    pub fn to_params(&self, timeout_seconds: Option<u64>) -> GenerationParams {
        let mut params = GenerationParams::from_preset(self.preset);
        if let Some(t) = self.temperature {
            params = params.with_temperature(t);
        }
        if let Some(n) = self.max_tokens {
            params = params.with_max_tokens(n);
        }
        if let Some(secs) = timeout_seconds {
            params = params.with_request_timeout(Duration::from_secs(secs));
        }
        params
    }
}
