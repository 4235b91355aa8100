//! Configuration file loading for local-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_ENDPOINT` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. Global: `$XDG_CONFIG_HOME/local-council/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileCouncilConfig, FileDebateConfig, FileEndpointConfig,
    FileGenerationConfig, FileLoggingConfig, FileMemberConfig, FileOutputConfig,
    FileSessionConfig,
};
pub use loader::{ConfigLoader, ConfigSource};
