//! Model value object representing a locally served LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Locally served models (Value Object)
///
/// The identifier is passed verbatim to the inference endpoint; the named
/// variants are the models the default council is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Qwen3 4B with an explicit thinking phase
    Qwen3Thinking,
    /// DeepSeek R1 distilled onto Qwen3 8B
    DeepSeekR1,
    /// Qwen3 VL 4B (text or image-URL prompts)
    Qwen3Vl,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Qwen3Thinking => "qwen/qwen3-4b-thinking-2507",
            Model::DeepSeekR1 => "deepseek/deepseek-r1-0528-qwen3-8b",
            Model::Qwen3Vl => "qwen/qwen3-vl-4b",
            Model::Custom(s) => s,
        }
    }

    /// Resolve an identifier, falling back to [`Model::Custom`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "qwen/qwen3-4b-thinking-2507" => Model::Qwen3Thinking,
            "deepseek/deepseek-r1-0528-qwen3-8b" => Model::DeepSeekR1,
            "qwen/qwen3-vl-4b" => Model::Qwen3Vl,
            other => Model::Custom(other.to_string()),
        }
    }

    /// Get the models backing the default council, in turn order
    pub fn default_models() -> Vec<Model> {
        vec![Model::Qwen3Thinking, Model::DeepSeekR1, Model::Qwen3Vl]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_names() {
        for model in Model::default_models() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
            assert!(!matches!(parsed, Model::Custom(_)));
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistralai/ministral-8b".parse().unwrap();
        assert_eq!(model, Model::Custom("mistralai/ministral-8b".to_string()));
        assert_eq!(model.to_string(), "mistralai/ministral-8b");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::DeepSeekR1).unwrap();
        assert_eq!(json, "\"deepseek/deepseek-r1-0528-qwen3-8b\"");
        let model: Model = serde_json::from_str("\"qwen/qwen3-vl-4b\"").unwrap();
        assert_eq!(model, Model::Qwen3Vl);
    }
}
