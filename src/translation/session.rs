/*!
 * Per-run translation session.
 *
 * A session wires one cache and one terminology table to a translator for a
 * single document run, so no translation state outlives or crosses
 * `translate_document` calls. The single-unit path lives here; the batch
 * merge protocol is layered on top in the `batch` module.
 */

use log::{error, info, warn};

use crate::terminology::TerminologyTable;

use super::cache::{CacheStats, TranslationCache};
use super::core::Translator;
use super::prompts;

/// Language, domain, and sizing parameters for one session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Terminology domain; `None` means the generic domain
    pub domain: Option<String>,

    /// Token ceiling for single-unit requests
    pub max_tokens_single: u32,

    /// Token ceiling for merged batch requests; larger, since a batch packs
    /// several units into one completion
    pub max_tokens_batch: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_language: "zh".to_string(),
            domain: None,
            max_tokens_single: 4096,
            max_tokens_batch: 8192,
        }
    }
}

/// Translation state scoped to one document run
pub struct TranslationSession {
    /// Request issuer
    pub(crate) translator: Translator,

    /// Translation memory for this run
    pub(crate) cache: TranslationCache,

    /// Controlled vocabulary for this run's domain
    pub(crate) terminology: TerminologyTable,

    /// Session parameters
    pub(crate) options: SessionOptions,
}

impl TranslationSession {
    /// Create a session and load the terminology table for its domain.
    ///
    /// A failed terminology load degrades to an empty table; it never aborts
    /// the run.
    pub fn new(translator: Translator, mut terminology: TerminologyTable, options: SessionOptions) -> Self {
        if let Some(domain) = options.domain.as_deref() {
            match terminology.load(domain) {
                Ok(count) => {
                    if count > 0 {
                        info!("terminology: {} term(s) loaded for domain '{}'", count, domain);
                    }
                }
                Err(e) => warn!("terminology load failed for domain '{}': {}", domain, e),
            }
        }
        Self {
            translator,
            cache: TranslationCache::new(),
            terminology,
            options,
        }
    }

    /// Session options
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The loaded terminology table
    pub fn terminology(&self) -> &TerminologyTable {
        &self.terminology
    }

    /// Cache counters for the end-of-run report
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Domain component of the cache key ("" for the generic domain)
    pub(crate) fn domain_key(&self) -> &str {
        self.options.domain.as_deref().unwrap_or_default()
    }

    /// Translate one text unit.
    ///
    /// Checks the translation memory first; on a miss, issues one provider
    /// call, enforces terminology on the result, and caches it. A provider
    /// failure is logged and degrades to the original text.
    pub async fn translate_single(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        if let Some(hit) = self.cache.get(
            text,
            &self.options.source_language,
            &self.options.target_language,
            self.domain_key(),
        ) {
            return hit;
        }

        let hints = self.terminology.hints_for(text);
        let prompt = prompts::single_system_prompt(
            &self.options.source_language,
            &self.options.target_language,
            self.options.domain.as_deref(),
            &hints,
        );

        match self
            .translator
            .request(&prompt, text, self.options.max_tokens_single)
            .await
        {
            Ok(raw) => self.enhance_and_cache(text, raw.trim()),
            Err(e) => {
                error!("translation failed, keeping original text: {}", e);
                text.to_string()
            }
        }
    }

    /// Terminology enforcement followed by a cache write; every successful
    /// translation (batch or single) funnels through here before reinjection.
    pub(crate) fn enhance_and_cache(&self, source: &str, candidate: &str) -> String {
        let enhanced = self.terminology.enhance(source, candidate);
        self.cache.store(
            source,
            &self.options.source_language,
            &self.options.target_language,
            self.domain_key(),
            &enhanced,
        );
        enhanced
    }
}
