//! Turn value object

use crate::core::topic::Topic;
use crate::council::member::CouncilMember;
use crate::orchestration::phase::Phase;
use serde::{Deserialize, Serialize};

/// One sanitized model output attributed to one speaker (Value Object)
///
/// Produced exactly once per inference call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker_id: String,
    speaker_name: String,
    topic: String,
    phase: Phase,
    text: String,
}

impl Turn {
    pub fn new(
        speaker: &CouncilMember,
        topic: &Topic,
        phase: Phase,
        text: impl Into<String>,
    ) -> Self {
        Self {
            speaker_id: speaker.id().to_string(),
            speaker_name: speaker.display_name().to_string(),
            topic: topic.content().to_string(),
            phase,
            text: text.into(),
        }
    }

    pub fn speaker_id(&self) -> &str {
        &self.speaker_id
    }

    pub fn speaker_name(&self) -> &str {
        &self.speaker_name
    }

    /// The topic this turn responded to
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Heading shown above the turn by the presentation layer
    pub fn label(&self) -> String {
        match self.phase {
            Phase::Initial => self.speaker_name.clone(),
            Phase::Review => format!("{} Reviews", self.speaker_name),
            Phase::Synthesis => format!("Final Conclusion ({})", self.speaker_name),
        }
    }

    /// The single transcript line this turn contributes to a prompt
    pub fn transcript_line(&self) -> String {
        match self.phase {
            Phase::Initial => format!("{}: {}", self.speaker_name, self.text),
            Phase::Review => format!("{} (review): {}", self.speaker_name, self.text),
            Phase::Synthesis => format!("{} (conclusion): {}", self.speaker_name, self.text),
        }
    }
}
