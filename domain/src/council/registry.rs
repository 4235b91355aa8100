//! Council registry: the immutable, ordered table of members.

use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::council::member::{CouncilMember, PresentationTag};
use std::collections::HashSet;

/// Ordered set of council members (Aggregate)
///
/// Registration order is the turn order of every mode: whenever several
/// members act within a phase they act in exactly this order.
///
/// The registry is validated on construction and never mutated; share it
/// with `Arc<CouncilRegistry>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouncilRegistry {
    members: Vec<CouncilMember>,
    /// Index of the member that writes the debate conclusion
    synthesizer: usize,
}

impl CouncilRegistry {
    /// Build a registry from members in turn order.
    ///
    /// The first member is the synthesizer until
    /// [`with_synthesizer`](Self::with_synthesizer) says otherwise.
    pub fn new(members: Vec<CouncilMember>) -> Result<Self, DomainError> {
        if members.is_empty() {
            return Err(DomainError::NoMembers);
        }

        let mut seen = HashSet::new();
        for member in &members {
            if member.id().trim().is_empty() {
                return Err(DomainError::InvalidMember("member id cannot be empty".to_string()));
            }
            if member.display_name().trim().is_empty() {
                return Err(DomainError::InvalidMember(format!(
                    "{}: display name cannot be empty",
                    member.id()
                )));
            }
            if member.model().as_str().trim().is_empty() {
                return Err(DomainError::InvalidMember(format!(
                    "{}: model cannot be empty",
                    member.id()
                )));
            }
            if !seen.insert(member.id().to_lowercase()) {
                return Err(DomainError::DuplicateMember(member.id().to_string()));
            }
        }

        Ok(Self {
            members,
            synthesizer: 0,
        })
    }

    /// Designate the member that writes the debate conclusion
    pub fn with_synthesizer(mut self, id: &str) -> Result<Self, DomainError> {
        self.synthesizer = self.position(id)?;
        Ok(self)
    }

    /// The built-in three-member council served by a local LM Studio
    pub fn default_council() -> Self {
        let members = vec![
            CouncilMember::new("thinker", "Thinker", Model::Qwen3Thinking)
                .with_presentation_tag(PresentationTag::Blue),
            CouncilMember::new("deepseek", "DeepSeek", Model::DeepSeekR1)
                .with_presentation_tag(PresentationTag::Red),
            CouncilMember::new("vision", "Vision", Model::Qwen3Vl)
                .with_presentation_tag(PresentationTag::Green),
        ];
        Self {
            members,
            synthesizer: 0,
        }
    }

    /// All members in turn order
    pub fn members(&self) -> &[CouncilMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look a member up by its exact id
    pub fn get(&self, id: &str) -> Result<&CouncilMember, DomainError> {
        self.members
            .iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| DomainError::UnknownMember(id.to_string()))
    }

    /// Resolve a user's pick: a 1-based position or a member id
    /// (case-insensitive).
    pub fn select(&self, choice: &str) -> Result<&CouncilMember, DomainError> {
        let choice = choice.trim();

        if let Ok(n) = choice.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| self.members.get(i))
                .ok_or_else(|| DomainError::UnknownMember(choice.to_string()));
        }

        self.members
            .iter()
            .find(|m| m.id().eq_ignore_ascii_case(choice))
            .ok_or_else(|| DomainError::UnknownMember(choice.to_string()))
    }

    /// The member that writes the debate conclusion
    pub fn synthesizer(&self) -> &CouncilMember {
        &self.members[self.synthesizer]
    }

    /// Models backing the council, in turn order
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.members.iter().map(|m| m.model())
    }

    fn position(&self, id: &str) -> Result<usize, DomainError> {
        self.members
            .iter()
            .position(|m| m.id() == id)
            .ok_or_else(|| DomainError::UnknownMember(id.to_string()))
    }
}

impl Default for CouncilRegistry {
    fn default() -> Self {
        Self::default_council()
    }
}
