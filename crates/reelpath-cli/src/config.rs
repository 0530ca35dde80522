//! CLI configuration

use std::path::PathBuf;

use reelpath_imdb::LoadOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overrides the config file location
pub const CONFIG_ENV: &str = "REELPATH_CONFIG";

const KEYS: &[&str] = &["actors_file", "movies_file", "format", "title_types", "skip_isolated"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Path of the config file
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelpath")
        .join("config.toml")
}

/// Persistent CLI settings; command line flags take precedence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title_types: Vec<String>,

    pub skip_isolated: bool,
}

impl Config {
    /// Load the config file, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "actors_file" => self.actors_file.as_ref().map(|p| p.display().to_string()),
            "movies_file" => self.movies_file.as_ref().map(|p| p.display().to_string()),
            "format" => self.format.clone(),
            "title_types" => (!self.title_types.is_empty()).then(|| self.title_types.join(",")),
            "skip_isolated" => Some(self.skip_isolated.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "actors_file" => self.actors_file = Some(PathBuf::from(value)),
            "movies_file" => self.movies_file = Some(PathBuf::from(value)),
            "format" => match value.to_lowercase().as_str() {
                "table" | "json" => self.format = Some(value.to_lowercase()),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: format!("expected 'table' or 'json', got '{}'", value),
                    })
                }
            },
            "title_types" => {
                self.title_types = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            "skip_isolated" => {
                self.skip_isolated = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("expected 'true' or 'false', got '{}'", value),
                })?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Loader options derived from this config
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::default();
        if !self.title_types.is_empty() {
            options = options.with_title_types(self.title_types.clone());
        }
        if self.skip_isolated {
            options = options.skip_isolated();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("actors_file", "/data/name.basics.tsv").unwrap();
        config.set("format", "JSON").unwrap();
        config.set("title_types", "movie, tvMovie").unwrap();

        assert_eq!(config.get("actors_file").as_deref(), Some("/data/name.basics.tsv"));
        assert_eq!(config.get("format").as_deref(), Some("json"));
        assert_eq!(config.title_types, vec!["movie", "tvMovie"]);
        assert!(config.get("movies_file").is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert!(matches!(config.set("nope", "x"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(config.set("format", "csv"), Err(ConfigError::InvalidValue { .. })));
        assert!(matches!(config.set("skip_isolated", "maybe"), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("movies_file", "movies.tsv").unwrap();
        config.set("skip_isolated", "true").unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_options() {
        let mut config = Config::default();
        assert_eq!(config.load_options().title_types, vec!["movie"]);

        config.set("title_types", "tvMovie").unwrap();
        config.set("skip_isolated", "true").unwrap();
        let options = config.load_options();
        assert_eq!(options.title_types, vec!["tvMovie"]);
        assert!(options.skip_isolated);
    }
}
