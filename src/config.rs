//! Run settings.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. Command-line flags (or their environment variables)
//! 2. The YAML file named by `--config`
//! 3. Built-in defaults
//!
//! Example config file:
//!
//! ```yaml
//! input: Input.csv
//! output: output.csv
//! stop_words_dir: StopWords
//! title_selectors: ["h1.entry-title", "h1"]
//! timeout_secs: 10
//! ```

use crate::cli::Cli;
use crate::error::{MetricsError, Result};
use crate::lexicon::LexiconPaths;
use crate::outputs::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub text_dir: PathBuf,
    pub stop_words_dir: PathBuf,
    pub positive_words: PathBuf,
    pub negative_words: PathBuf,
    /// Tried in order; the first match is the article title.
    pub title_selectors: Vec<String>,
    /// Tried in order; the first match is the article body container.
    pub body_selectors: Vec<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Input.csv"),
            output: PathBuf::from("output.csv"),
            format: OutputFormat::Csv,
            text_dir: PathBuf::from("extracted_text_files"),
            stop_words_dir: PathBuf::from("StopWords"),
            positive_words: PathBuf::from("MasterDictionary/positive-words.txt"),
            negative_words: PathBuf::from("MasterDictionary/negative-words.txt"),
            title_selectors: vec![
                "h1.entry-title".to_string(),
                "h1.tdb-title-text".to_string(),
                "article h1".to_string(),
                "h1".to_string(),
            ],
            body_selectors: vec![
                "div.td-post-content".to_string(),
                "div.tdb-block-inner".to_string(),
                "article".to_string(),
                "main".to_string(),
                "body".to_string(),
            ],
            user_agent: concat!("awful_text_metrics/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse settings from YAML; missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| MetricsError::Config(e.to_string()))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| MetricsError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&yaml)
    }

    /// Layer the command line over the config file over the defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                info!(path = %path.display(), "Loading config file");
                Self::from_yaml_file(path)?
            }
            None => Self::default(),
        };
        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
        set(&mut self.input, &cli.input);
        set(&mut self.output, &cli.output);
        set(&mut self.format, &cli.format);
        set(&mut self.text_dir, &cli.text_dir);
        set(&mut self.stop_words_dir, &cli.stop_words_dir);
        set(&mut self.positive_words, &cli.positive_words);
        set(&mut self.negative_words, &cli.negative_words);
        set(&mut self.user_agent, &cli.user_agent);
        set(&mut self.timeout_secs, &cli.timeout_secs);
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(MetricsError::Config("timeout_secs must be positive".to_string()));
        }
        if self.title_selectors.is_empty() || self.body_selectors.is_empty() {
            return Err(MetricsError::Config(
                "title_selectors and body_selectors must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lexicon_paths(&self) -> LexiconPaths {
        LexiconPaths {
            stop_words_dir: self.stop_words_dir.clone(),
            positive_words: self.positive_words.clone(),
            negative_words: self.negative_words.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input, PathBuf::from("Input.csv"));
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.title_selectors.last().unwrap(), "h1");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("output: report.json\nformat: json\n").unwrap();
        assert_eq!(settings.output, PathBuf::from("report.json"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.input, PathBuf::from("Input.csv"));
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(matches!(
            Settings::from_yaml("outptu: typo.csv\n"),
            Err(MetricsError::Config(_))
        ));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.yaml");
        fs::write(&path, "input: from_file.csv\ntext_dir: file_texts\n").unwrap();

        let cli = Cli {
            config: Some(path),
            input: Some(PathBuf::from("from_cli.csv")),
            ..Cli::default()
        };
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.input, PathBuf::from("from_cli.csv"));
        assert_eq!(settings.text_dir, PathBuf::from("file_texts"));
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let cli = Cli {
            timeout_secs: Some(0),
            ..Cli::default()
        };
        assert!(matches!(
            Settings::resolve(&cli),
            Err(MetricsError::Config(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..Cli::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }
}
