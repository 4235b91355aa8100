//! Prompt templates for the council flow

/// Templates for generating user messages at each stage
///
/// Every message ends with [`STRUCTURE_SUFFIX`](Self::STRUCTURE_SUFFIX). The
/// gateway sends the result verbatim.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Appended to every user message
    pub const STRUCTURE_SUFFIX: &'static str =
        "Structure your answer with bullets or short paragraphs for easy reading.";

    /// Instruction given to the synthesizer in the debate conclusion
    pub const CONCLUSION_INSTRUCTION: &'static str =
        "Summarize key points from above in a short, clear conclusion.";

    /// User message for a member answering `message`, grounded in the
    /// projected context (empty when there is none)
    pub fn member_prompt(message: &str, grounding: &str) -> String {
        let structured = format!("{}\n\n{}", message, Self::STRUCTURE_SUFFIX);
        if grounding.is_empty() {
            structured
        } else {
            format!("{}\n\n{}", grounding, structured)
        }
    }

    /// Cross-examination request embedding the phase-1 transcript
    pub fn review_request(topic: &str, transcript: &str) -> String {
        format!(
            "Review responses to '{}':\n{}\nComment briefly on each by name.",
            topic, transcript
        )
    }

    /// User message for a cross-examination turn.
    ///
    /// The transcript is embedded in the request itself, so no separate
    /// grounding is prepended.
    pub fn review_prompt(topic: &str, transcript: &str) -> String {
        Self::member_prompt(&Self::review_request(topic, transcript), "")
    }

    /// User message for the debate conclusion, grounded in the full transcript
    pub fn conclusion_prompt(transcript: &str) -> String {
        Self::member_prompt(Self::CONCLUSION_INSTRUCTION, transcript)
    }
}
