/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for the translation backends:
 * - DeepSeek: hosted chat-completions API
 * - Mock: scripted behaviors for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation request sent to a provider.
///
/// The provider owns transport and authentication; the pipeline only supplies
/// the prompt material and sampling parameters.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// System prompt guiding the translation
    pub system_prompt: String,

    /// The text to translate (a single unit or a sentinel-merged batch)
    pub user_text: String,

    /// Sampling temperature (low for deterministic translations)
    pub temperature: f32,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the translation session.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Human-readable provider name for logging
    fn name(&self) -> &str;
}

pub mod deepseek;
pub mod mock;
