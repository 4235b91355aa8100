//! Generation parameters: what every inference request carries.
//!
//! Two deployments of the council have historically run with very different
//! settings. They are exposed as [`GenerationPreset`]s rather than as
//! behavioral branches; individual fields can still be overridden.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPreset {
    /// Low temperature and a large output budget, so reasoning models can
    /// finish thinking before they answer
    #[default]
    Thorough,
    /// Higher temperature with short answers
    Brief,
}

impl GenerationPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPreset::Thorough => "thorough",
            GenerationPreset::Brief => "brief",
        }
    }
}

impl std::fmt::Display for GenerationPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GenerationPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thorough" => Ok(GenerationPreset::Thorough),
            "brief" => Ok(GenerationPreset::Brief),
            _ => Err(format!("Invalid generation preset: {}", s)),
        }
    }
}

/// Per-request parameters sent to the inference endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Bound on a single request's round trip.
    pub request_timeout: Duration,
}

impl GenerationParams {
    pub fn from_preset(preset: GenerationPreset) -> Self {
        match preset {
            GenerationPreset::Thorough => Self {
                temperature: 0.1,
                max_tokens: 4096,
                request_timeout: Duration::from_secs(300),
            },
            GenerationPreset::Brief => Self {
                temperature: 0.75,
                max_tokens: 300,
                request_timeout: Duration::from_secs(240),
            },
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::from_preset(GenerationPreset::default())
    }
}
