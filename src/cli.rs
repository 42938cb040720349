//! Command-line interface definitions for Awful Text Metrics.
//!
//! Every option can also be supplied through an environment variable or the
//! YAML config file; see [`crate::config::Settings`] for the precedence rules.

use crate::outputs::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Awful Text Metrics application.
///
/// Options left unset fall back to the config file, then to built-in
/// defaults.
///
/// # Examples
///
/// ```sh
/// # Defaults: Input.csv -> output.csv, texts in extracted_text_files/
/// awful_text_metrics
///
/// # Explicit paths and JSON output
/// awful_text_metrics -i urls.csv -o report.json -f json
///
/// # Settings from a file
/// awful_text_metrics -c metrics.yaml
/// ```
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Input CSV with `URL_ID,URL` columns
    #[arg(short, long, env = "METRICS_INPUT")]
    pub input: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long, env = "METRICS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, env = "METRICS_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Directory for the per-article text files
    #[arg(short, long, env = "METRICS_TEXT_DIR")]
    pub text_dir: Option<PathBuf>,

    /// Directory of stop-word files
    #[arg(long, env = "METRICS_STOP_WORDS_DIR")]
    pub stop_words_dir: Option<PathBuf>,

    /// Positive word list
    #[arg(long, env = "METRICS_POSITIVE_WORDS")]
    pub positive_words: Option<PathBuf>,

    /// Negative word list
    #[arg(long, env = "METRICS_NEGATIVE_WORDS")]
    pub negative_words: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "METRICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, env = "METRICS_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "METRICS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
