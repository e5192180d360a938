/*!
 * Error types for the slidetrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while reading or writing a deck container
#[derive(Error, Debug)]
pub enum DeckError {
    /// Error opening the deck file
    #[error("Failed to open deck: {0}")]
    Open(String),

    /// Error parsing the deck container
    #[error("Failed to parse deck: {0}")]
    Parse(String),

    /// Error persisting the deck file
    #[error("Failed to save deck: {0}")]
    Save(String),

    /// A write target referenced by a text unit no longer resolves
    #[error("Write target not found: {0}")]
    TargetNotFound(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The merged response did not split back into the expected number of segments.
    /// Internal signal only: it triggers the per-unit fallback and is never
    /// surfaced to the caller of the batch path.
    #[error("Segment count mismatch: sent {expected}, received {actual}")]
    CountMismatch {
        /// Number of units sent in the batch
        expected: usize,
        /// Number of segments found in the response
        actual: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing configuration (fatal at construction)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from the deck container
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        Self::Open(error.to_string())
    }
}
