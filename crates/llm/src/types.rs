use serde::{Deserialize, Serialize};
use textrelay_common::{Result, TextRelayError};

/// Chat-completion request body (OpenRouter-compatible)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier (e.g., "deepseek/deepseek-r1:free")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build a single-user-message request
    pub fn user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: content.into(),
            }],
        }
    }
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("user", "assistant", ...)
    pub role: String,

    /// Message text
    pub content: String,
}

/// Chat-completion response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the answer
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Extract the text content of the first completion choice
    pub fn into_first_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TextRelayError::unexpected_shape("completion response has no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest::user("deepseek/deepseek-r1:free", "Translate this.\n第一章");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "deepseek/deepseek-r1:free");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Translate this.\n第一章");
    }

    #[test]
    fn test_first_choice_extraction() {
        let body = r#"{
            "id": "gen-abc",
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_first_content().unwrap(), "first");
    }

    #[test]
    fn test_empty_choices_is_shape_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = response.into_first_content().unwrap_err();
        assert!(matches!(err, TextRelayError::UnexpectedResponseShape(_)));
    }

    #[test]
    fn test_missing_choices_field_is_shape_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"id": "gen-abc"}"#).unwrap();
        assert!(response.into_first_content().is_err());
    }
}
