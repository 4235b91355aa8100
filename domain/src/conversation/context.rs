//! Conversation context: the append-only turn log of a session.

use crate::conversation::turn::Turn;
use crate::conversation::window::ContextWindow;
use serde::{Deserialize, Serialize};

/// Ordered log of every turn produced in a session (Entity)
///
/// Turns are kept in call order; the log is never reordered, deduplicated or
/// truncated. Prompt text is a projection of the log made at call time by
/// [`render`](Self::render).
///
/// A continuation session receives a clone of its parent's context, so work
/// done in the child never leaks back into the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    turns: Vec<Turn>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the log
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of turns in the log
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Project the log into prompt text.
    ///
    /// Consecutive turns on the same topic are grouped under a
    /// `Responses to '<topic>':` line, one transcript line per turn.
    /// Returns an empty string when nothing falls inside the window.
    pub fn render(&self, window: &ContextWindow) -> String {
        let mut out = String::new();
        let mut current_topic: Option<&str> = None;

        for turn in window.apply(&self.turns) {
            if current_topic != Some(turn.topic()) {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("Responses to '{}':\n", turn.topic()));
                current_topic = Some(turn.topic());
            }
            out.push_str(&turn.transcript_line());
            out.push('\n');
        }

        out
    }
}
