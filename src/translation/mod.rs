/*!
 * Translation pipeline for deck text units.
 *
 * This module contains the provider-facing translation machinery. It is
 * split into several submodules:
 *
 * - `core`: single request issuing against the configured provider
 * - `session`: per-run state (cache + terminology) and the single-unit path
 * - `batch`: sentinel merge protocol with count validation and fallback
 * - `boilerplate`: placeholder marker filtering
 * - `prompts`: persona preambles and system prompt builders
 * - `cache`: translation memory keyed by text, language pair, and domain
 */

// Re-export main types for easier usage
pub use self::batch::{SENTINEL, SENTINEL_TOKEN};
pub use self::cache::{CacheStats, TranslationCache};
pub use self::core::Translator;
pub use self::session::{SessionOptions, TranslationSession};

// Submodules
pub mod batch;
pub mod boilerplate;
pub mod cache;
pub mod core;
pub mod prompts;
pub mod session;
