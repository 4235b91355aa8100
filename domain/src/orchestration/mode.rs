//! Session mode definitions.
//!
//! A [`SessionMode`] picks the conversation protocol a session runs. The mode
//! is fixed for the lifetime of a session: follow-ups always re-enter the
//! mode they were raised in.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation protocol of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// Initial responses, cross-examination, then a conclusion
    Debate,
    /// Every member explains the topic, each building on the previous
    Teach,
    /// One chosen member answers
    AskOne,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Debate => "debate",
            SessionMode::Teach => "teach",
            SessionMode::AskOne => "ask-one",
        }
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            SessionMode::Debate => "Debate: answers, cross-examination, conclusion",
            SessionMode::Teach => "Teach: each member explains, building on the last",
            SessionMode::AskOne => "Ask One: put the topic to a single member",
        }
    }

    /// Whether the mode calls every member
    pub fn is_whole_council(&self) -> bool {
        !matches!(self, SessionMode::AskOne)
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debate" | "d" => Ok(SessionMode::Debate),
            "teach" | "t" => Ok(SessionMode::Teach),
            "ask-one" | "ask_one" | "ask" | "a" => Ok(SessionMode::AskOne),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
