//! OpenAI-compatible wire types
//!
//! Only the fields the council reads or writes are modelled; unknown fields
//! in responses are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// `GET /v1/models` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest {
            model: "qwen/qwen3-vl-4b",
            messages: vec![ChatMessage::system(""), ChatMessage::user("hi")],
            temperature: 0.75,
            max_tokens: 300,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "qwen/qwen3-vl-4b");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 300);
    }

    #[test]
    fn test_parse_completion() {
        let raw = r#"{"id":"x","object":"chat.completion","choices":[
            {"index":0,"message":{"role":"assistant","content":"<think>a</think>b"},"finish_reason":"stop"}
        ]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_first_content().as_deref(), Some("<think>a</think>b"));
    }

    #[test]
    fn test_parse_empty_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.into_first_content().is_none());
    }

    #[test]
    fn test_parse_model_list() {
        let raw = r#"{"object":"list","data":[{"id":"qwen/qwen3-4b-thinking-2507","object":"model"}]}"#;
        let parsed: ModelList = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data[0].id, "qwen/qwen3-4b-thinking-2507");
    }
}
