use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::app_config::Config;
use crate::deck::{apply_translation, Deck, DeckStore, DeckWalker, TextUnit};
use crate::errors::AppError;
use crate::providers::deepseek::DeepSeek;
use crate::providers::Provider;
use crate::terminology::TerminologyTable;
use crate::translation::boilerplate::strip_placeholders;
use crate::translation::cache::CacheStats;
use crate::translation::{SessionOptions, TranslationSession, Translator};

// @module: Application controller for deck translation

/// Counters describing one `translate_document` run
#[derive(Debug, Clone, Default)]
pub struct TranslationReport {
    /// Number of slides in the deck
    pub slides: usize,
    /// Text units extracted by the walker
    pub units_total: usize,
    /// Units whose translation was written back
    pub units_translated: usize,
    /// Units excluded as boilerplate-only
    pub units_skipped: usize,
    /// Units whose result came back identical to the input (provider
    /// failure fallback, or genuinely unchanged); left untouched
    pub units_unchanged: usize,
    /// Units whose write-back failed
    pub units_failed: usize,
    /// Cache counters for the run
    pub cache: CacheStats,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl TranslationReport {
    /// Generate a human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Translated {} of {} unit(s) across {} slide(s) \
             ({} boilerplate, {} unchanged, {} failed write-backs); \
             cache: {} hit(s), {} miss(es); elapsed: {:.1}s",
            self.units_translated,
            self.units_total,
            self.slides,
            self.units_skipped,
            self.units_unchanged,
            self.units_failed,
            self.cache.hits,
            self.cache.misses,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Main application controller for deck translation
pub struct Controller {
    /// App configuration
    config: Config,

    /// Provider used by every session this controller creates
    provider: Arc<dyn Provider>,
}

impl Controller {
    /// Create a controller backed by the DeepSeek API.
    ///
    /// Fails fast with a configuration error when no API key can be
    /// resolved from config or environment.
    pub fn new(mut config: Config) -> Result<Self, AppError> {
        config.resolve_api_key();
        config.validate()?;
        let provider = Arc::new(DeepSeek::new(
            &config.provider.api_key,
            &config.provider.endpoint,
            config.provider.timeout_secs,
        ));
        Ok(Self { config, provider })
    }

    /// Create a controller with an injected provider (used by tests and by
    /// front ends supplying their own client)
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Result<Self, AppError> {
        config.validate_languages()?;
        Ok(Self { config, provider })
    }

    /// The effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate one deck from `input` to `output`.
    ///
    /// Pipeline: open, walk, filter boilerplate, batch-translate per
    /// text-bearing shape, enhance, cache, reinject, save. The progress
    /// callback fires after each slide completes and must not block.
    ///
    /// Only open/parse and save failures abort; every other failure
    /// degrades to leaving the affected fragment untranslated.
    pub async fn translate_document<F>(
        &self,
        input: &Path,
        output: &Path,
        progress: F,
    ) -> Result<TranslationReport, AppError>
    where
        F: Fn(usize, usize),
    {
        let start = Instant::now();

        let mut deck = DeckStore::open(input)?;
        let units = DeckWalker::walk(&deck);
        info!(
            "extracted {} text unit(s) from {} slide(s)",
            units.len(),
            deck.slides.len()
        );

        let translator = Translator::new(
            Arc::clone(&self.provider),
            &self.config.provider.model,
            self.config.provider.temperature,
        );
        let terminology = TerminologyTable::new(&self.config.terms_dir);
        let session = TranslationSession::new(
            translator,
            terminology,
            SessionOptions {
                source_language: self.config.source_language.clone(),
                target_language: self.config.target_language.clone(),
                domain: self.config.domain.clone(),
                max_tokens_single: self.config.provider.max_tokens_single,
                max_tokens_batch: self.config.provider.max_tokens_batch,
            },
        );

        let total_slides = deck.slides.len();
        let mut report = TranslationReport {
            slides: total_slides,
            units_total: units.len(),
            ..Default::default()
        };

        // One batch per text-bearing shape, in walk order
        let mut groups_by_slide: Vec<Vec<Vec<TextUnit>>> =
            (0..total_slides).map(|_| Vec::new()).collect();
        for group in group_units(units) {
            let slide = group[0].target.slide;
            groups_by_slide[slide].push(group);
        }

        for (slide_idx, slide_groups) in groups_by_slide.into_iter().enumerate() {
            for group in slide_groups {
                self.translate_group(&mut deck, &session, group, &mut report)
                    .await;
            }
            progress(slide_idx + 1, total_slides);
        }

        report.cache = session.cache_stats();
        report.elapsed = start.elapsed();

        DeckStore::save(&deck, output)?;
        Ok(report)
    }

    /// Translate one group of units and write the results back
    async fn translate_group(
        &self,
        deck: &mut Deck,
        session: &TranslationSession,
        group: Vec<TextUnit>,
        report: &mut TranslationReport,
    ) {
        // Boilerplate filter: units reduced to nothing are excluded and
        // their original text stays untouched in the document
        let mut pending = Vec::with_capacity(group.len());
        for unit in group {
            let stripped = strip_placeholders(&unit.text);
            if stripped.is_empty() {
                report.units_skipped += 1;
                continue;
            }
            pending.push((unit, stripped));
        }
        if pending.is_empty() {
            return;
        }

        let texts: Vec<String> = pending.iter().map(|(_, text)| text.clone()).collect();
        let translated = session.translate_batch(&texts).await;

        for ((unit, source), result) in pending.into_iter().zip(translated) {
            // The failure paths hand back the input text; writing it would
            // collapse runs for nothing, so identical results are skipped
            if result == source {
                report.units_unchanged += 1;
                continue;
            }
            match apply_translation(deck, &unit.target, &result) {
                Ok(()) => report.units_translated += 1,
                Err(e) => {
                    error!("write-back failed for unit {}: {}", unit.id, e);
                    report.units_failed += 1;
                }
            }
        }
    }
}

/// Group consecutive units belonging to the same top-level shape.
///
/// The walker emits units in reading order, so grouping only needs to watch
/// for the (slide, shape) key changing between neighbors.
fn group_units(units: Vec<TextUnit>) -> Vec<Vec<TextUnit>> {
    let mut groups: Vec<Vec<TextUnit>> = Vec::new();
    for unit in units {
        let key = (unit.target.slide, unit.target.shape_path[0]);
        match groups.last_mut() {
            Some(group)
                if (group[0].target.slide, group[0].target.shape_path[0]) == key =>
            {
                group.push(unit);
            }
            _ => groups.push(vec![unit]),
        }
    }
    groups
}
