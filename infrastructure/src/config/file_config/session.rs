//! Session configuration from TOML (`[session]` and `[debate]` sections)

use council_application::SessionParams;
use council_domain::ContextWindow;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Words that leave the follow-up loop (case-insensitive)
    pub exit_keywords: Vec<String>,
    /// Project only the most recent N turns into prompts
    pub max_context_turns: Option<usize>,
    /// Pause between debate calls in milliseconds (0 disables)
    pub pause_ms: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            exit_keywords: vec!["back".to_string()],
            max_context_turns: None,
            pause_ms: 500,
        }
    }
}

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// End each debate with the synthesizer's conclusion
    pub conclusion: bool,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self { conclusion: true }
    }
}

impl FileSessionConfig {
    pub fn to_params(&self, debate: &FileDebateConfig) -> SessionParams {
        SessionParams::default()
            .with_window(ContextWindow::from_max_turns(self.max_context_turns))
            .with_pause(Duration::from_millis(self.pause_ms))
            .with_exit_keywords(self.exit_keywords.clone())
            .with_debate_conclusion(debate.conclusion)
    }
}
