//! Chat-completion client.
//!
//! Wire types follow the OpenAI chat-completions schema, which Azure OpenAI
//! serves unchanged. The [`ChatBackend`] trait is the seam between the
//! benchmark runner and the network:
//!
//! ```text
//! Benchmark ──> dyn ChatBackend ──┬──> AzureChatClient (HTTPS)
//!                                 └──> scripted backends (tests)
//! ```

mod azure;

pub use azure::{parse_response, AzureChatClient};

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Message text; responses may carry `null` (e.g. filtered output)
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    /// Message with an arbitrary role
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.to_string()),
        }
    }

    /// System message
    pub fn system(content: &str) -> Self {
        Self::new("system", content)
    }

    /// User message
    pub fn user(content: &str) -> Self {
        Self::new("user", content)
    }

    /// Assistant message
    pub fn assistant(content: &str) -> Self {
        Self::new("assistant", content)
    }
}

/// Chat completion request body.
///
/// Azure selects the model through the deployment in the URL, so no
/// `model` field is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Conversation
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Optional cap on completion tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Response identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Model that served the request
    #[serde(default)]
    pub model: Option<String>,
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token accounting
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text of the first choice, if any
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// A single generated choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ChatMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage reported by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Input tokens billed
    pub prompt_tokens: u32,
    /// Output tokens generated
    pub completion_tokens: u32,
    /// Sum of the two, as reported upstream
    pub total_tokens: u32,
}

/// Backend able to answer a chat completion request.
pub trait ChatBackend: Send + Sync {
    /// Send one request and wait for the full response.
    fn complete<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'a>>;

    /// Model or deployment name, for reports.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.0,
            max_tokens: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["temperature"], 0.0);
        assert!(value.get("max_tokens").is_none());
        assert!(value.get("model").is_none());
    }

    #[test]
    fn test_request_with_max_tokens() {
        let request = ChatRequest {
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.0,
            max_tokens: Some(256),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 256);
    }

    #[test]
    fn test_response_content() {
        let response = ChatResponse {
            id: None,
            model: None,
            choices: vec![Choice {
                message: ChatMessage::assistant("answer"),
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        };
        assert_eq!(response.content(), Some("answer"));
    }

    #[test]
    fn test_response_without_choices() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.content(), None);
        assert!(response.usage.is_none());
    }
}
