/*!
 * # slidetrans - Structure-preserving slide deck translation with AI
 *
 * A Rust library for translating the text embedded in slide decks while
 * preserving the document structure and best-effort formatting.
 *
 * ## Features
 *
 * - Ordered extraction of text units from slides, shapes, tables, charts,
 *   and nested groups
 * - Sentinel-delimited batching of units into single provider requests,
 *   with per-unit fallback when the delimiter is not preserved
 * - Domain terminology enforcement as a post-processing pass
 * - Session-scoped translation memory to avoid repeated provider calls
 * - Run-collapsing reinjection that never loses formatting data it was
 *   not given
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `deck`: Deck container model, persistence, walker, and reinjection
 * - `translation`: Provider-facing translation pipeline:
 *   - `translation::session`: per-run state and the single-unit path
 *   - `translation::batch`: sentinel merge protocol
 *   - `translation::cache`: translation memory
 *   - `translation::boilerplate`: placeholder filtering
 * - `terminology`: Domain term table loading and enforcement
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for translation backends
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod deck;
pub mod errors;
pub mod providers;
pub mod terminology;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, TranslationReport};
pub use deck::{Deck, DeckStore, DeckWalker, TextUnit};
pub use errors::{AppError, DeckError, ProviderError, TranslationError};
pub use terminology::TerminologyTable;
pub use translation::{SessionOptions, TranslationSession};
