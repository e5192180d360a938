/*!
 * Batch merge protocol.
 *
 * Packs an ordered list of text units into one provider request by joining
 * them with a sentinel delimiter, validates the response by splitting it
 * back, and falls back to per-unit calls when the provider fails to preserve
 * the delimiter. A provider-level failure never loses the original text and
 * never aborts the document.
 */

use log::{error, warn};

use crate::errors::TranslationError;

use super::prompts;
use super::session::TranslationSession;

/// Delimiter inserted between units when merging them into one request
pub const SENTINEL: &str = "\n===[SEPARATOR]===\n";

/// The delimiter's core token; responses are split on this so that models
/// which reflow whitespace around the marker still validate
pub const SENTINEL_TOKEN: &str = "===[SEPARATOR]===";

/// Split a merged response into trimmed segments
pub fn split_segments(response: &str) -> Vec<String> {
    response
        .split(SENTINEL_TOKEN)
        .map(|segment| segment.trim().to_string())
        .collect()
}

impl TranslationSession {
    /// Translate an ordered list of already-filtered unit texts.
    ///
    /// Always returns exactly `texts.len()` strings in the same order. Units
    /// the provider could not translate come back as their original text.
    /// An empty input issues no provider call.
    pub async fn translate_batch(&self, texts: &[String]) -> Vec<String> {
        if texts.is_empty() {
            return Vec::new();
        }

        match self.translate_merged(texts).await {
            Ok(segments) => texts
                .iter()
                .zip(segments)
                .map(|(source, segment)| self.enhance_and_cache(source, &segment))
                .collect(),
            Err(TranslationError::CountMismatch { expected, actual }) => {
                warn!(
                    "batch segment count mismatch (sent {}, received {}); retrying per unit",
                    expected, actual
                );
                let mut results = Vec::with_capacity(texts.len());
                for text in texts {
                    results.push(self.translate_single(text).await);
                }
                results
            }
            Err(e) => {
                error!("batch translation failed, keeping original text: {}", e);
                texts.to_vec()
            }
        }
    }

    /// One merged provider call, validated against the unit count
    async fn translate_merged(&self, texts: &[String]) -> Result<Vec<String>, TranslationError> {
        let merged = texts.join(SENTINEL);
        let hints = self.terminology.hints_for(&merged);
        let prompt = prompts::batch_system_prompt(
            &self.options.source_language,
            &self.options.target_language,
            self.options.domain.as_deref(),
            &hints,
        );

        let response = self
            .translator
            .request(&prompt, &merged, self.options.max_tokens_batch)
            .await?;

        let segments = split_segments(&response);
        if segments.len() != texts.len() {
            return Err(TranslationError::CountMismatch {
                expected: texts.len(),
                actual: segments.len(),
            });
        }
        Ok(segments)
    }
}
