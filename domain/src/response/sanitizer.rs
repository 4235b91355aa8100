//! Reasoning-block sanitizer.
//!
//! Reasoning models wrap their deliberation in `<think>` … `</think>` before
//! the final answer. Only the final answer is shown to the user or folded
//! into the conversation context.

/// Shown instead of the raw output when a model ran out of output budget
/// while still inside its reasoning block.
pub const TRUNCATED_REASONING_NOTICE: &str =
    "[Error: Model ran out of tokens while thinking. Please increase Context Length in LM Studio.]";

/// Outcome of classifying a raw model output.
///
/// Exactly one variant applies to every input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitized {
    /// A closing delimiter was found; holds the trimmed text after its last occurrence
    Answer(String),
    /// An opening delimiter was found without any closing delimiter
    TruncatedReasoning,
    /// No delimiter was found; holds the trimmed input
    Plain(String),
}

impl Sanitized {
    /// The text to display and record
    pub fn into_text(self) -> String {
        match self {
            Sanitized::Answer(text) | Sanitized::Plain(text) => text,
            Sanitized::TruncatedReasoning => TRUNCATED_REASONING_NOTICE.to_string(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Sanitized::TruncatedReasoning)
    }
}

/// Strips a single reasoning-delimiter pattern from model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSanitizer {
    open: String,
    close: String,
}

impl Default for ResponseSanitizer {
    fn default() -> Self {
        Self::new("<think>", "</think>")
    }
}

impl ResponseSanitizer {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn classify(&self, raw: &str) -> Sanitized {
        if let Some((_, answer)) = raw.rsplit_once(self.close.as_str()) {
            return Sanitized::Answer(answer.trim().to_string());
        }
        if raw.contains(self.open.as_str()) {
            return Sanitized::TruncatedReasoning;
        }
        Sanitized::Plain(raw.trim().to_string())
    }

    /// Map raw output to the text that is displayed and recorded
    pub fn sanitize(&self, raw: &str) -> String {
        self.classify(raw).into_text()
    }
}
