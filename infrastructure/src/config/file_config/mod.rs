//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod council;
mod endpoint;
mod generation;
mod output;
mod session;

pub use council::{FileCouncilConfig, FileMemberConfig};
pub use endpoint::FileEndpointConfig;
pub use generation::FileGenerationConfig;
pub use output::{FileLoggingConfig, FileOutputConfig};
pub use session::{FileDebateConfig, FileSessionConfig};

use council_application::{GenerationParams, SessionParams};
use council_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("endpoint.url cannot be empty")]
    EmptyEndpoint,

    #[error("session.exit_keywords must contain at least one keyword")]
    NoExitKeywords,

    #[error("session.exit_keywords[{0}] cannot be empty")]
    BlankExitKeyword(usize),

    #[error("council.members[{index}].{field} cannot be empty")]
    EmptyMemberField { index: usize, field: &'static str },

    #[error("Invalid council: {0}")]
    Council(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: FileEndpointConfig,
    pub generation: FileGenerationConfig,
    pub council: FileCouncilConfig,
    pub session: FileSessionConfig,
    pub debate: FileDebateConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.endpoint.url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::ZeroValue("endpoint.timeout_seconds"));
        }
        if self.endpoint.health_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue(
                "endpoint.health_timeout_seconds",
            ));
        }
        if let Some(0) = self.generation.max_tokens {
            return Err(ConfigValidationError::ZeroValue("generation.max_tokens"));
        }
        if let Some(0) = self.session.max_context_turns {
            return Err(ConfigValidationError::ZeroValue("session.max_context_turns"));
        }
        if self.output.box_width == 0 {
            return Err(ConfigValidationError::ZeroValue("output.box_width"));
        }
        if self.session.exit_keywords.is_empty() {
            return Err(ConfigValidationError::NoExitKeywords);
        }
        if let Some(index) = self
            .session
            .exit_keywords
            .iter()
            .position(|k| k.trim().is_empty())
        {
            return Err(ConfigValidationError::BlankExitKeyword(index));
        }

        for (index, member) in self.council.members.iter().enumerate() {
            for (field, value) in [
                ("id", &member.id),
                ("name", &member.name),
                ("model", &member.model),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigValidationError::EmptyMemberField { index, field });
                }
            }
        }

        // Duplicate ids and an unknown synthesizer are caught here
        self.council.to_registry()?;

        Ok(())
    }

    pub fn generation_params(&self) -> GenerationParams {
        self.generation.to_params(self.endpoint.timeout_seconds)
    }

    pub fn session_params(&self) -> SessionParams {
        self.session.to_params(&self.debate)
    }
}
