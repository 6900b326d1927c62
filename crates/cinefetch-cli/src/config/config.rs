//! `AppConfig` struct, TOML read/write and environment overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Comma-separated OMDb keys overriding `[omdb] api_keys`.
pub const OMDB_KEYS_ENV: &str = "OMDB_API_KEYS";

/// Comma-separated TMDB keys overriding `[tmdb] api_keys`.
pub const TMDB_KEYS_ENV: &str = "TMDB_API_KEYS";

/// Per-attempt timeout when none is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
    /// TMDB settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// `[omdb]` section.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API keys, tried in order.
    #[serde(default)]
    pub api_keys: Vec<String>,
    /// Per-attempt timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// `[tmdb]` section.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API keys, tried in order.
    #[serde(default)]
    pub api_keys: Vec<String>,
    /// Response language.
    #[serde(default = "default_language")]
    pub language: String,
    /// Region filter.
    #[serde(default = "default_region")]
    pub region: String,
    /// Per-attempt timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_language() -> String {
    String::from("zh-TW")
}

fn default_region() -> String {
    String::from("TW")
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            language: default_language(),
            region: default_region(),
            timeout_secs: None,
            base_url: None,
        }
    }
}

impl OmdbConfig {
    /// Per-attempt timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

impl TmdbConfig {
    /// Per-attempt timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Splits a comma-separated key list, dropping blanks.
fn split_keys(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Rejects settings that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns an error if a `timeout_secs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.omdb.timeout_secs == Some(0) {
            bail!("[omdb] timeout_secs must be at least 1");
        }
        if self.tmdb.timeout_secs == Some(0) {
            bail!("[tmdb] timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Replaces key lists with non-empty values from `lookup`
    /// (normally `std::env::var`).
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(keys) = lookup(OMDB_KEYS_ENV).map(|v| split_keys(&v))
            && !keys.is_empty()
        {
            tracing::debug!(count = keys.len(), "Using OMDb API keys from {OMDB_KEYS_ENV}");
            self.omdb.api_keys = keys;
        }
        if let Some(keys) = lookup(TMDB_KEYS_ENV).map(|v| split_keys(&v))
            && !keys.is_empty()
        {
            tracing::debug!(count = keys.len(), "Using TMDB API keys from {TMDB_KEYS_ENV}");
            self.tmdb.api_keys = keys;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert!(config.omdb.api_keys.is_empty());
        assert_eq!(config.tmdb.language, "zh-TW");
        assert_eq!(config.tmdb.region, "TW");
        assert_eq!(config.omdb.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let toml_str = r#"
            [omdb]
            api_keys = ["k1", "k2"]
            timeout_secs = 3

            [tmdb]
            api_keys = ["t1"]
            language = "en-US"
            region = "US"
        "#;

        // Act
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.omdb.api_keys, vec!["k1", "k2"]);
        assert_eq!(config.omdb.timeout(), Duration::from_secs(3));
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(config.tmdb.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            omdb: OmdbConfig {
                api_keys: vec![String::from("k1")],
                timeout_secs: Some(5),
                base_url: None,
            },
            tmdb: TmdbConfig::default(),
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb\napi_keys = 1").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb]\napi_keys = [\"t1\"]\ntimeout_secs = 0\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("[tmdb] timeout_secs must be at least 1"));
    }

    #[test]
    fn test_env_overrides_replace_keys() {
        // Arrange
        let mut config = AppConfig::default();
        config.omdb.api_keys = vec![String::from("file-key")];

        // Act
        let config = config.with_env_overrides(|name| match name {
            OMDB_KEYS_ENV => Some(String::from(" a, ,b ")),
            _ => None,
        });

        // Assert
        assert_eq!(config.omdb.api_keys, vec!["a", "b"]);
        assert!(config.tmdb.api_keys.is_empty());
    }

    #[test]
    fn test_blank_env_keeps_file_keys() {
        // Arrange
        let mut config = AppConfig::default();
        config.tmdb.api_keys = vec![String::from("file-key")];

        // Act
        let config = config.with_env_overrides(|_| Some(String::from(" , ")));

        // Assert
        assert_eq!(config.tmdb.api_keys, vec!["file-key"]);
    }
}
