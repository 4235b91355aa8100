//! Session parameters: orchestration control.
//!
//! [`SessionParams`] groups the static parameters that control
//! [`RunCouncilUseCase`](crate::use_cases::run_council::RunCouncilUseCase)
//! and the follow-up loop. These are application-layer concerns, not domain policy.

use council_domain::ContextWindow;
use std::time::Duration;

/// Orchestration control parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    /// How much of the turn log is projected into each prompt.
    pub window: ContextWindow,
    /// Pause after each debate call in the first two phases.
    pub pause: Duration,
    /// Case-insensitive keywords that leave the follow-up loop.
    pub exit_keywords: Vec<String>,
    /// Whether a debate ends with the synthesizer's conclusion.
    pub debate_conclusion: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            window: ContextWindow::unlimited(),
            pause: Duration::from_millis(500),
            exit_keywords: vec!["back".to_string()],
            debate_conclusion: true,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_window(mut self, window: ContextWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Blank keywords are dropped so an empty line never counts as an exit
    pub fn with_exit_keywords(mut self, keywords: Vec<String>) -> Self {
        self.exit_keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    pub fn with_debate_conclusion(mut self, enabled: bool) -> Self {
        self.debate_conclusion = enabled;
        self
    }

    /// Whether `input` is one of the exit keywords
    pub fn is_exit_keyword(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_keywords
            .iter()
            .any(|k| k.trim().eq_ignore_ascii_case(input))
    }

    /// The keyword suggested at the follow-up prompt
    pub fn primary_exit_keyword(&self) -> &str {
        self.exit_keywords
            .first()
            .map(String::as_str)
            .unwrap_or("back")
    }
}
