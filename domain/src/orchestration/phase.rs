//! Phase of a council session

use serde::{Deserialize, Serialize};

/// Phase a turn was produced in
///
/// Teach and Ask-One only have an initial phase; Debate runs all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Initial responses - members answer the topic
    Initial,
    /// Cross-examination - members comment on each other's answers
    Review,
    /// Conclusion - the synthesizer summarizes the transcript
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Initial => "initial",
            Phase::Review => "review",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Initial => "Initial Responses",
            Phase::Review => "Cross-Examination",
            Phase::Synthesis => "Conclusion",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Phase::Initial.to_string(), "Initial Responses");
        assert_eq!(Phase::Review.to_string(), "Cross-Examination");
        assert_eq!(Phase::Synthesis.to_string(), "Conclusion");
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Phase::Review).unwrap();
        assert_eq!(json, "\"review\"");
    }
}
