//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_MAX_WIDGET_DEPTH, MAX_WIDGET_DEPTH_LIMIT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable explanation including the accepted range
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use faq_howto_schema::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("page.json"),
///     pretty: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page input JSON file (`-` reads stdin)
    pub input: PathBuf,

    /// Output file for the generated document (stdout when `None`)
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Also emit the human-readable markup for both content types
    pub render_markup: bool,

    /// Also emit standalone FAQPage/HowTo documents
    pub standalone: bool,

    /// Maximum widget tree depth visited while mining accordions
    pub max_widget_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("page.json"),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            pretty: false,
            render_markup: false,
            standalone: false,
            max_widget_depth: DEFAULT_MAX_WIDGET_DEPTH,
        }
    }
}

impl Config {
    /// Checks value ranges that clap cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_widget_depth == 0 || self.max_widget_depth > MAX_WIDGET_DEPTH_LIMIT {
            return Err(ConfigValidationError {
                field: "max_widget_depth",
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_WIDGET_DEPTH_LIMIT, self.max_widget_depth
                ),
            });
        }
        Ok(())
    }
}

/// Command-line options for the `faq_howto_schema` binary.
///
/// # Examples
///
/// ```bash
/// # Compile the graph for one page
/// faq_howto_schema page.json --pretty
///
/// # Include shortcode markup and standalone documents
/// faq_howto_schema page.json --render-markup --standalone --output out.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "faq_howto_schema",
    about = "Compiles FAQ and HowTo page data into schema.org JSON-LD."
)]
pub struct Opt {
    /// Page input JSON file (`-` for stdin)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(long, short = 'o', value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Include the shortcode markup in the output
    #[arg(long)]
    pub render_markup: bool,

    /// Include standalone FAQPage/HowTo documents in the output
    #[arg(long)]
    pub standalone: bool,

    /// Maximum widget tree depth visited while mining accordions
    #[arg(long, default_value_t = DEFAULT_MAX_WIDGET_DEPTH)]
    pub max_widget_depth: usize,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            log_level: opt.log_level,
            log_format: opt.log_format,
            pretty: opt.pretty,
            render_markup: opt.render_markup,
            standalone: opt.standalone,
            max_widget_depth: opt.max_widget_depth,
        }
    }
}
