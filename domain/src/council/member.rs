//! Council member entity

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Rendering hint attached to a member.
///
/// Orchestration never looks at it; the presentation layer maps it to a
/// terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationTag {
    Blue,
    Red,
    Green,
    Yellow,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl PresentationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationTag::Blue => "blue",
            PresentationTag::Red => "red",
            PresentationTag::Green => "green",
            PresentationTag::Yellow => "yellow",
            PresentationTag::Magenta => "magenta",
            PresentationTag::Cyan => "cyan",
            PresentationTag::White => "white",
        }
    }
}

/// A configured model persona participating in the council (Entity)
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilMember {
    id: String,
    display_name: String,
    model: Model,
    #[serde(default)]
    system_instruction: String,
    #[serde(default)]
    presentation_tag: PresentationTag,
}

impl CouncilMember {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, model: Model) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            model,
            system_instruction: String::new(),
            presentation_tag: PresentationTag::default(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_presentation_tag(mut self, tag: PresentationTag) -> Self {
        self.presentation_tag = tag;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn presentation_tag(&self) -> PresentationTag {
        self.presentation_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_builder() {
        let member = CouncilMember::new("thinker", "Thinker", Model::Qwen3Thinking)
            .with_system_instruction("Be brief.")
            .with_presentation_tag(PresentationTag::Blue);

        assert_eq!(member.id(), "thinker");
        assert_eq!(member.display_name(), "Thinker");
        assert_eq!(member.model(), &Model::Qwen3Thinking);
        assert_eq!(member.system_instruction(), "Be brief.");
        assert_eq!(member.presentation_tag(), PresentationTag::Blue);
    }

    #[test]
    fn test_defaults_are_empty_instruction_and_white() {
        let member = CouncilMember::new("x", "X", Model::Custom("m".to_string()));
        assert!(member.system_instruction().is_empty());
        assert_eq!(member.presentation_tag(), PresentationTag::White);
    }

    #[test]
    fn test_tag_deserialize_lowercase() {
        let tag: PresentationTag = serde_json::from_str("\"magenta\"").unwrap();
        assert_eq!(tag, PresentationTag::Magenta);
        assert_eq!(tag.as_str(), "magenta");
    }
}
