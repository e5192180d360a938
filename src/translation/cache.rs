/*!
 * Translation memory cache.
 *
 * Session-scoped key-value store of previously computed translations, keyed
 * by normalized text, language pair, and domain. Unbounded, no TTL; it lives
 * exactly as long as its owning session.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

/// Cache key: normalized text plus language pair plus domain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    /// Normalized (trimmed) source text
    text: String,
    /// Source language code
    source_language: String,
    /// Target language code
    target_language: String,
    /// Terminology domain ("" for the generic domain)
    domain: String,
}

/// Hit/miss counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Translation memory for one session
pub struct TranslationCache {
    /// Internal cache storage; per-key reads and writes are atomic
    entries: Arc<RwLock<HashMap<CacheKey, String>>>,
    /// Lookup counters
    stats: Arc<RwLock<CacheStats>>,
}

impl TranslationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        }
    }

    /// Look up a previously computed translation
    pub fn get(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        domain: &str,
    ) -> Option<String> {
        let key = CacheKey {
            text: text.trim().to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            domain: domain.to_string(),
        };

        let hit = self.entries.read().get(&key).cloned();
        let mut stats = self.stats.write();
        match &hit {
            Some(_) => {
                stats.hits += 1;
                debug!("cache hit ({} -> {}, domain '{}')", source_language, target_language, domain);
            }
            None => {
                stats.misses += 1;
            }
        }
        hit
    }

    /// Store a computed translation
    pub fn store(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        domain: &str,
        translation: &str,
    ) {
        let key = CacheKey {
            text: text.trim().to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            domain: domain.to_string(),
        };
        self.entries.write().insert(key, translation.to_string());
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        *self.stats.read()
    }

    /// Number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            stats: self.stats.clone(),
        }
    }
}
