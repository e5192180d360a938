/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::echoing()` - Translates each merged segment by prefixing it
 * - `MockProvider::scripted(..)` - Replays a fixed sequence of responses
 * - `MockProvider::merged()` - Drops the sentinel delimiter (count mismatch)
 * - `MockProvider::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use crate::errors::ProviderError;
use crate::providers::{ChatRequest, Provider};
use crate::translation::batch::{SENTINEL, SENTINEL_TOKEN};

/// Behavior mode for the mock provider
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Translate every sentinel-delimited segment by prefixing it
    Echo {
        /// Prefix prepended to each segment
        prefix: String,
    },
    /// Replay queued responses in order, then fail
    Scripted,
    /// Echo the segments but drop the sentinel delimiter between them
    Merged,
    /// Always fail with an API error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Queued responses for scripted mode
    responses: Arc<StdMutex<VecDeque<String>>>,
    /// Every request received, in order
    requests: Arc<StdMutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: Arc::new(StdMutex::new(VecDeque::new())),
            requests: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    /// Create an echoing mock that marks each segment as translated
    pub fn echoing() -> Self {
        Self::new(MockBehavior::Echo { prefix: "[T] ".to_string() })
    }

    /// Create an echoing mock with a custom segment prefix
    pub fn echoing_with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(MockBehavior::Echo { prefix: prefix.into() })
    }

    /// Create a scripted mock that replays the given responses in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new(MockBehavior::Scripted);
        {
            let mut queue = provider.responses.lock().unwrap();
            queue.extend(responses.into_iter().map(|r| r.into()));
        }
        provider
    }

    /// Create a mock that drops the sentinel delimiter from its responses
    pub fn merged() -> Self {
        Self::new(MockBehavior::Merged)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of every request received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            responses: Arc::clone(&self.responses),
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            MockBehavior::Echo { prefix } => {
                let segments: Vec<String> = request.user_text
                    .split(SENTINEL_TOKEN)
                    .map(|segment| format!("{}{}", prefix, segment.trim()))
                    .collect();
                Ok(segments.join(SENTINEL))
            }

            MockBehavior::Scripted => {
                let mut queue = self.responses.lock().unwrap();
                queue.pop_front().ok_or_else(|| {
                    ProviderError::RequestFailed("scripted responses exhausted".to_string())
                })
            }

            MockBehavior::Merged => {
                let segments: Vec<String> = request.user_text
                    .split(SENTINEL_TOKEN)
                    .map(|segment| format!("[T] {}", segment.trim()))
                    .collect();
                Ok(segments.join("\n"))
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
