use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    pub source_language: String,

    /// Target language code (ISO)
    pub target_language: String,

    /// Terminology domain (e.g. "computer", "os"); None means generic
    #[serde(default)]
    pub domain: Option<String>,

    /// Directory holding `<domain>_terms.txt` term files
    #[serde(default = "default_terms_dir")]
    pub terms_dir: PathBuf,

    /// Provider config
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to the DEEPSEEK_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,

    /// Service URL; empty selects the public endpoint
    #[serde(default)]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Token ceiling for single-unit requests
    #[serde(default = "default_max_tokens_single")]
    pub max_tokens_single: u32,

    /// Token ceiling for merged batch requests
    #[serde(default = "default_max_tokens_batch")]
    pub max_tokens_batch: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_terms_dir() -> PathBuf {
    PathBuf::from("terms")
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens_single() -> u32 {
    4096
}

fn default_max_tokens_batch() -> u32 {
    8192
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            temperature: default_temperature(),
            max_tokens_single: default_max_tokens_single(),
            max_tokens_batch: default_max_tokens_batch(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_language: "zh".to_string(),
            domain: None,
            terms_dir: default_terms_dir(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Fill an empty API key from the DEEPSEEK_API_KEY environment variable
    pub fn resolve_api_key(&mut self) {
        if self.provider.api_key.is_empty() {
            if let Ok(key) = env::var("DEEPSEEK_API_KEY") {
                self.provider.api_key = key;
            }
        }
    }

    /// Validate language settings
    pub fn validate_languages(&self) -> Result<(), AppError> {
        if self.source_language.trim().is_empty() {
            return Err(AppError::Configuration("source language is empty".to_string()));
        }
        if self.target_language.trim().is_empty() {
            return Err(AppError::Configuration("target language is empty".to_string()));
        }
        Ok(())
    }

    /// Validate the configuration for a real provider run.
    ///
    /// A missing API key is fatal at construction time; nothing else in the
    /// pipeline can recover from it.
    pub fn validate(&self) -> Result<(), AppError> {
        self.validate_languages()?;
        if self.provider.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "no API key provided; set provider.api_key or the DEEPSEEK_API_KEY environment variable"
                    .to_string(),
            ));
        }
        if self.provider.model.trim().is_empty() {
            return Err(AppError::Configuration("provider model is empty".to_string()));
        }
        Ok(())
    }
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
