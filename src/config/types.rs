//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_FEED_BASE_URL, FEED_TIMEOUT_SECS};

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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One `(score, 'domain')` tuple per line
    Text,
    /// One JSON object per line
    Jsonl,
}

impl ReportFormat {
    /// File extension used for reports in this format.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Jsonl => "jsonl",
        }
    }
}

/// How the acceptance threshold is chosen when no explicit value is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThresholdMode {
    /// Fixed 0.5 cutoff on every metric's own scale
    Legacy,
    /// Each metric's own default cutoff
    Metric,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_similarity::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     wordlist: PathBuf::from("brands.txt"),
///     metric: "j".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Wordlist file, one term per line
    pub wordlist: PathBuf,

    /// Directory the report is written to
    pub output_dir: PathBuf,

    /// Metric flag (`s`, `e`, `j` or the long metric name)
    pub metric: String,

    /// Threshold selection when `threshold` is unset
    pub threshold_mode: ThresholdMode,

    /// Explicit acceptance threshold on the metric's scale
    pub threshold: Option<f64>,

    /// Local candidate file (`-` for stdin); the feed is fetched when unset
    pub domains: Option<PathBuf>,

    /// Feed day; defaults to the previous UTC calendar day
    pub date: Option<NaiveDate>,

    /// Feed base URL
    pub feed_url: String,

    /// Report format
    pub format: ReportFormat,

    /// Feed request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlist.txt"),
            output_dir: PathBuf::from("."),
            metric: "s".to_string(),
            threshold_mode: ThresholdMode::Legacy,
            threshold: None,
            domains: None,
            date: None,
            feed_url: DEFAULT_FEED_BASE_URL.to_string(),
            format: ReportFormat::Text,
            timeout_seconds: FEED_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Sequence similarity against yesterday's feed
/// domain_similarity brands.txt ./reports/
///
/// # Jaccard with per-metric cutoffs on a local domain list
/// domain_similarity brands.txt ./reports/ -t j --threshold-mode metric --domains nrd.txt
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_similarity",
    about = "Flags newly registered domains that resemble watchlist terms."
)]
pub struct Opt {
    /// Word list file to use for similarity matches
    #[arg(value_parser)]
    pub wordlist: PathBuf,

    /// Directory for the report
    #[arg(value_parser)]
    pub output_dir: PathBuf,

    /// Similarity type: s (sequence ratio), e (edit distance), j (Jaccard)
    #[arg(short = 't', long = "type", default_value = "s")]
    pub metric: String,

    /// Threshold selection: legacy (0.5 everywhere) or metric (per-metric default)
    #[arg(long, value_enum, default_value_t = ThresholdMode::Legacy)]
    pub threshold_mode: ThresholdMode,

    /// Explicit acceptance threshold on the chosen metric's scale
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Read candidate domains from a text or zip file (`-` for stdin) instead of the feed
    #[arg(long, value_parser)]
    pub domains: Option<PathBuf>,

    /// Feed day (YYYY-MM-DD); defaults to yesterday in UTC
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Feed base URL
    #[arg(long, default_value = DEFAULT_FEED_BASE_URL)]
    pub feed_url: String,

    /// Report format: text|jsonl
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Feed request timeout in seconds
    #[arg(long, default_value_t = FEED_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            wordlist: opt.wordlist,
            output_dir: opt.output_dir,
            metric: opt.metric,
            threshold_mode: opt.threshold_mode,
            threshold: opt.threshold,
            domains: opt.domains,
            date: opt.date,
            feed_url: opt.feed_url,
            format: opt.format,
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
