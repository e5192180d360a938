// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use slidetrans::app_config::{Config, LogLevel};
use slidetrans::app_controller::Controller;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// slidetrans - structure-preserving slide deck translation
///
/// Translates the text of a slide deck container into another language
/// while keeping the document structure intact.
#[derive(Parser, Debug)]
#[command(name = "slidetrans")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered slide deck translation tool")]
#[command(long_about = "slidetrans extracts the text of a slide deck, translates it in batches, \
and writes the results back into the original structure.

EXAMPLES:
    slidetrans deck.json -o deck.zh.json                 # Translate with defaults (en -> zh)
    slidetrans -s en -t fr deck.json -o deck.fr.json     # Choose the language pair
    slidetrans -d computer deck.json -o out.json         # Enforce computer-science terminology
    slidetrans --log-level debug deck.json -o out.json   # Verbose logging

CONFIGURATION:
    Configuration is read from conf.json when present; command-line options
    override it. The API key comes from provider.api_key or the
    DEEPSEEK_API_KEY environment variable.")]
struct CommandLineOptions {
    /// Input deck file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output path for the translated deck
    #[arg(short, long)]
    output: PathBuf,

    /// Source language code (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'zh', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Terminology domain (e.g. 'computer', 'os')
    #[arg(short, long)]
    domain: Option<String>,

    /// Directory holding <domain>_terms.txt files
    #[arg(long)]
    terms_dir: Option<PathBuf>,

    /// API key (falls back to the DEEPSEEK_API_KEY environment variable)
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(stderr, "\x1B[1;31m{} ERROR {}\x1B[0m", now, record.args()),
                Level::Warn => writeln!(stderr, "\x1B[1;33m{} WARN  {}\x1B[0m", now, record.args()),
                Level::Info => writeln!(stderr, "{} INFO  {}", now, record.args()),
                Level::Debug => writeln!(stderr, "\x1B[0;36m{} DEBUG {}\x1B[0m", now, record.args()),
                Level::Trace => writeln!(stderr, "\x1B[0;90m{} TRACE {}\x1B[0m", now, record.args()),
            };
        }
    }

    fn flush(&self) {}
}

/// Build the effective configuration from file plus CLI overrides
fn build_config(options: &CommandLineOptions) -> Result<Config> {
    let mut config = if Path::new(&options.config_path).exists() {
        Config::from_file(&options.config_path)?
    } else {
        Config::default()
    };

    if let Some(source) = &options.source_language {
        config.source_language = source.clone();
    }
    if let Some(target) = &options.target_language {
        config.target_language = target.clone();
    }
    if let Some(domain) = &options.domain {
        config.domain = Some(domain.clone());
    }
    if let Some(terms_dir) = &options.terms_dir {
        config.terms_dir = terms_dir.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.provider.api_key = api_key.clone();
    }
    if let Some(model) = &options.model {
        config.provider.model = model.clone();
    }
    if let Some(level) = &options.log_level {
        config.log_level = level.clone().into();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();
    let config = build_config(&options)?;

    CustomLogger::init(config.log_level.to_level_filter())
        .context("failed to initialize logger")?;

    let controller = Controller::new(config)?;

    let progress_bar = ProgressBar::hidden();
    progress_bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] slide {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let bar = progress_bar.clone();
    let report = controller
        .translate_document(&options.input_path, &options.output, move |done, total| {
            if bar.is_hidden() && total > 0 {
                bar.set_length(total as u64);
                bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            }
            bar.set_position(done as u64);
        })
        .await?;
    progress_bar.finish_and_clear();

    info!("{}", report.summary());
    Ok(())
}
