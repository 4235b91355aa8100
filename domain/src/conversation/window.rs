//! Context window for limiting how much history grounds a prompt.
//!
//! The turn log itself is never truncated. [`ContextWindow`] only decides how
//! many of the most recent turns are projected into prompt text, which keeps
//! long follow-up chains from outgrowing a small local model's context length.

use crate::conversation::turn::Turn;
use serde::{Deserialize, Serialize};

/// Projection limit applied when rendering the log into a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextWindow {
    max_turns: Option<usize>,
}

impl ContextWindow {
    /// Every turn is projected
    pub fn unlimited() -> Self {
        Self { max_turns: None }
    }

    /// Only the most recent `max_turns` turns are projected
    pub fn last(max_turns: usize) -> Self {
        Self {
            max_turns: Some(max_turns),
        }
    }

    pub fn from_max_turns(max_turns: Option<usize>) -> Self {
        Self { max_turns }
    }

    pub fn max_turns(&self) -> Option<usize> {
        self.max_turns
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_turns.is_none()
    }

    /// Widen the window so it keeps at least the last `turns` turns
    pub fn at_least(self, turns: usize) -> Self {
        match self.max_turns {
            Some(max) if max < turns => Self::last(turns),
            _ => self,
        }
    }

    /// The tail of `turns` that falls inside the window
    pub fn apply<'a>(&self, turns: &'a [Turn]) -> &'a [Turn] {
        match self.max_turns {
            Some(max) if turns.len() > max => &turns[turns.len() - max..],
            _ => turns,
        }
    }
}
