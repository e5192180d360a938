use std::time::Duration;
use serde::{Serialize, Deserialize};
use async_trait::async_trait;
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;
use crate::providers::{ChatRequest, Provider};

/// Default public API endpoint
const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1";

/// DeepSeek client for the OpenAI-compatible chat completions API
#[derive(Debug)]
pub struct DeepSeek {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Chat completion request payload
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    temperature: f32,

    /// Maximum number of tokens to generate
    max_tokens: u32,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat completion response payload
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    /// Candidate completions; the first one carries the translation
    choices: Vec<ChatChoice>,
}

/// Individual choice in a chat completion response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    /// The generated message
    message: ChatMessage,
}

impl DeepSeek {
    /// Create a new DeepSeek client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve the chat completions URL for the configured endpoint
    fn completions_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/chat/completions", base)
    }
}

#[async_trait]
impl Provider for DeepSeek {
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError> {
        let payload = ChatCompletionRequest {
            model: request.model,
            messages: vec![
                ChatMessage { role: "system".to_string(), content: request.system_prompt },
                ChatMessage { role: "user".to_string(), content: request.user_text },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self.client.post(self.completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepSeek API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let completion = response.json::<ChatCompletionResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let choice = completion.choices.into_iter().next()
            .ok_or_else(|| ProviderError::ParseError("response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = ChatRequest {
            model: "deepseek-chat".to_string(),
            system_prompt: String::new(),
            user_text: "Hello".to_string(),
            temperature: 0.3,
            max_tokens: 10,
        };
        self.complete(request).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "deepseek"
    }
}
