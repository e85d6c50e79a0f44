/// LLM Client: the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Generation goes through the `ChatCompletion` trait so tests can substitute it.
///
/// Model: gpt-4o-mini (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for every generation call.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One chat-completion request: an ordered list of role-tagged messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// A system + user pair for the default model.
    pub fn new(system: String, user: String, temperature: f32) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system,
                },
                ChatMessage {
                    role: Role::User,
                    content: user,
                },
            ],
            temperature,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first choice, unless it is missing or blank.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Something that can answer a chat-completion request.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest)
        -> Result<ChatResponse, LlmError>;
}

/// OpenAI-compatible HTTP client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    /// Makes one call. Failures are returned as-is; nothing is retried.
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = ChatRequest::new("sys".into(), "usr".into(), 0.7);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "sys");
        assert_eq!(value["messages"][1]["role"], "user");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_takes_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Hi Ada"}},
                            {"message": {"content": "other"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}}"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("Hi Ada"));
    }

    #[test]
    fn test_response_text_none_when_empty() {
        let no_choices: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(no_choices.text(), None);

        let null_content: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(null_content.text(), None);

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "  \n"}}]}"#).unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_parse_error_message_from_api_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(parse_error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn test_parse_error_message_falls_back_to_body() {
        assert_eq!(parse_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_api_error_displays_upstream_message() {
        let err = LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".into(),
        };
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }
}
