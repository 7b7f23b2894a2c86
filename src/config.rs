//! Configuration management for the resume ATS checker

use crate::error::{Result, ResumeAtsError};
use crate::processing::lexicon::Lexicon;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
}

/// Additions to the built-in keyword vocabularies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub extra_tech_terms: Vec<String>,
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ResumeAtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ResumeAtsError::InvalidInput(format!(
                "Invalid output format: {}. Valid options: console, json, markdown",
                s
            ))),
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAtsError::Configuration(format!("Failed to parse config: {}", e)))?;
            debug!("Loaded configuration from {}", config_path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            info!("Created default configuration at {}", config_path.display());
            Ok(config)
        }
    }

    /// Overwrite `config_path` with defaults without reading what is there
    pub fn reset_to(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path)?;
        info!("Reset configuration at {}", config_path.display());
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    /// Update one setting by its dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.format" => self.output.format = value.parse()?,
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_bool(key, value)?,
            "lexicon.extra_tech_terms" => self.lexicon.extra_tech_terms = parse_list(value),
            "lexicon.extra_stop_words" => self.lexicon.extra_stop_words = parse_list(value),
            _ => {
                return Err(ResumeAtsError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    pub fn build_lexicon(&self) -> Result<Lexicon> {
        Lexicon::with_extensions(
            self.lexicon.extra_tech_terms.clone(),
            self.lexicon.extra_stop_words.clone(),
        )
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        ResumeAtsError::Configuration(format!("{} expects true or false, got '{}'", key, value))
    })
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.set_value("output.format", "json").unwrap();
        config.set_value("lexicon.extra_tech_terms", "haskell, elixir,,").unwrap();

        config.save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();

        assert_eq!(reloaded.output.format, OutputFormat::Json);
        assert_eq!(reloaded.lexicon.extra_tech_terms, vec!["haskell", "elixir"]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndetailed = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(config.output.detailed);
        assert!(config.output.color_output);
        assert!(config.lexicon.extra_stop_words.is_empty());
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeAtsError::Configuration(_))
        ));
    }

    #[test]
    fn test_reset_replaces_unparseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        let config = Config::reset_to(&path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();

        assert!(config.set_value("output.detailed", "maybe").is_err());
        assert!(config.set_value("output.format", "html").is_err());
        assert!(config.set_value("models.dir", "x").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_lexicon_uses_extensions() {
        let mut config = Config::default();
        config.set_value("lexicon.extra_tech_terms", "Haskell").unwrap();

        let lexicon = config.build_lexicon().unwrap();

        assert!(lexicon.is_tech_term("haskell"));
    }
}
