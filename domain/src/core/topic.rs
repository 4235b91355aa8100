//! Topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A subject put to the council (Value Object)
///
/// Either the topic entered from the menu or a follow-up entered at the
/// continuation prompt. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a topic, rejecting empty or whitespace-only input
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::try_new(content).ok_or(DomainError::EmptyTopic)
    }

    /// Try to create a topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
