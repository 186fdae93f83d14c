//! Configuration management for the CLI.
//!
//! Values resolve in three layers: command-line flags override the config
//! file, which overrides built-in defaults.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default corpus and output paths
    #[serde(default)]
    pub paths: Paths,

    /// Analysis defaults
    #[serde(default)]
    pub analysis: Analysis,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Default file locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paths {
    /// Corpus path (JSON array file or directory of record files)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    /// Artifact output directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
}

/// Analysis defaults; each maps to a command-line flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Minimum Jaccard similarity for a relationship
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Minimum documents a keyword must appear in to be tracked
    #[serde(default = "default_min_occurrences")]
    pub min_keyword_occurrences: usize,

    /// Minimum keyword length in characters
    #[serde(default = "default_min_length")]
    pub min_keyword_length: usize,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".chronicle").join("config.toml"))
    }

    /// Load configuration from the default location or fall back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the corpus path: flag first, then config file.
    pub fn resolve_corpus(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.paths.corpus.clone()).ok_or_else(|| {
            CliError::InvalidInput(
                "No corpus path given; pass --corpus or set paths.corpus in the config file"
                    .to_string(),
            )
        })
    }

    /// Resolve the artifact output directory: flag, config file, then
    /// `./artifacts`.
    pub fn resolve_out(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.paths.out.clone())
            .unwrap_or_else(|| PathBuf::from("artifacts"))
    }
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_keyword_occurrences: default_min_occurrences(),
            min_keyword_length: default_min_length(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_threshold() -> f64 {
    0.5
}

fn default_min_occurrences() -> usize {
    25
}

fn default_min_length() -> usize {
    3
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.paths.corpus.is_none());
        assert_eq!(config.analysis.threshold, 0.5);
        assert_eq!(config.analysis.min_keyword_occurrences, 25);
        assert_eq!(config.analysis.min_keyword_length, 3);
        assert!(config.settings.color);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [analysis]
            threshold = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.threshold, 0.7);
        assert_eq!(config.analysis.min_keyword_occurrences, 25);
        assert!(config.settings.color);
    }

    #[test]
    fn test_resolve_corpus_prefers_flag() {
        let mut config = Config::default();
        config.paths.corpus = Some(PathBuf::from("from-config.json"));

        let resolved = config
            .resolve_corpus(Some(PathBuf::from("from-flag.json")))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("from-flag.json"));

        let resolved = config.resolve_corpus(None).unwrap();
        assert_eq!(resolved, PathBuf::from("from-config.json"));
    }

    #[test]
    fn test_resolve_corpus_requires_some_source() {
        let config = Config::default();
        assert!(config.resolve_corpus(None).is_err());
    }

    #[test]
    fn test_resolve_out_defaults() {
        let config = Config::default();
        assert_eq!(config.resolve_out(None), PathBuf::from("artifacts"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.analysis.threshold, config.analysis.threshold);
    }
}
