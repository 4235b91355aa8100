//! Council configuration from TOML (`[council]` section)

use super::ConfigValidationError;
use council_domain::{CouncilMember, CouncilRegistry, Model, PresentationTag};
use serde::{Deserialize, Serialize};

/// One `[[council.members]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMemberConfig {
    pub id: String,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub color: PresentationTag,
}

impl FileMemberConfig {
    fn to_member(&self) -> CouncilMember {
        CouncilMember::new(
            self.id.trim(),
            self.name.trim(),
            Model::from_name(self.model.trim()),
        )
        .with_system_instruction(self.system_prompt.clone())
        .with_presentation_tag(self.color)
    }
}

/// Raw council configuration from TOML
///
/// An empty member list means the built-in three-member council.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCouncilConfig {
    pub members: Vec<FileMemberConfig>,
    /// Member id that writes the debate conclusion (default: first member)
    pub synthesizer: Option<String>,
}

impl FileCouncilConfig {
    pub fn to_registry(&self) -> Result<CouncilRegistry, ConfigValidationError> {
        let registry = if self.members.is_empty() {
            CouncilRegistry::default_council()
        } else {
            CouncilRegistry::new(self.members.iter().map(FileMemberConfig::to_member).collect())?
        };

        match &self.synthesizer {
            Some(id) => Ok(registry.with_synthesizer(id.trim())?),
            None => Ok(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_members_from_toml() {
        let toml_str = r#"
[council]
synthesizer = "b"

[[council.members]]
id = "a"
name = "Alpha"
model = "qwen/qwen3-4b-thinking-2507"
color = "cyan"

[[council.members]]
id = "b"
name = "Beta"
model = "my-local-model"
system_prompt = "Argue the opposite."
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let registry = config.council.to_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.members()[0].model(), &Model::Qwen3Thinking);
        assert_eq!(registry.members()[0].presentation_tag(), PresentationTag::Cyan);
        assert_eq!(
            registry.members()[1].model(),
            &Model::Custom("my-local-model".into())
        );
        assert_eq!(registry.members()[1].system_instruction(), "Argue the opposite.");
        assert_eq!(registry.synthesizer().id(), "b");
    }

    #[test]
    fn test_empty_members_use_default_council() {
        let registry = FileCouncilConfig::default().to_registry().unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.members()[0].id(), "thinker");
    }

    #[test]
    fn test_unknown_synthesizer_is_rejected() {
        let config = FileCouncilConfig {
            members: vec![],
            synthesizer: Some("nobody".into()),
        };
        assert!(matches!(
            config.to_registry(),
            Err(ConfigValidationError::Council(_))
        ));
    }
}
