//! Output configuration from TOML (`[output]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Width of the box each turn is drawn in
    pub box_width: usize,
    /// Show a spinner while a member is working
    pub spinner: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            box_width: 80,
            spinner: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript destination; disabled when unset
    pub conversation_log: Option<PathBuf>,
}
