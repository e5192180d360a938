/*!
 * Core translator: one prompt+text request against the configured provider.
 *
 * The translator owns the provider client and the sampling parameters; the
 * session layers caching, terminology enforcement, and fallback policy on
 * top of it.
 */

use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{ChatRequest, Provider};

/// Issues single translation requests against a provider
#[derive(Clone)]
pub struct Translator {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Model identifier sent with every request
    model: String,

    /// Sampling temperature; low keeps translations deterministic
    temperature: f32,
}

impl Translator {
    /// Create a new translator for the given provider
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    /// Provider name for logging
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send one prompt+text request and return the raw translated string
    pub async fn request(
        &self,
        system_prompt: &str,
        text: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.model.clone(),
            system_prompt: system_prompt.to_string(),
            user_text: text.to_string(),
            temperature: self.temperature,
            max_tokens,
        };
        self.provider.complete(request).await
    }

    /// Test the connection to the provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }
}
