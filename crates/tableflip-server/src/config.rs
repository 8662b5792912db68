//! Server configuration
//!
//! Defaults, then an optional TOML file, then environment overrides:
//!
//! ```toml
//! addr = "0.0.0.0:8000"
//!
//! [slack]
//! signing_secret = "8f742231b10e8888abcd99yyyzzz85a5"
//! max_request_age_secs = 300
//! delivery = "inline"
//! ```
//!
//! The file is read from `$TABLEFLIP_CONFIG`, else `~/.tableflip/config.toml`.
//! `TABLEFLIP_ADDR` and `SLACK_SIGNING_SECRET` override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How responses reach Slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// Answer the slash command request directly
    #[default]
    Inline,
    /// Acknowledge, then POST to the request's `response_url`
    ResponseUrl,
}

/// Top-level server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
    pub slack: SlackConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
            slack: SlackConfig::default(),
        }
    }
}

/// Slack request verification and delivery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Signing secret; without it only the timestamp header is checked
    pub signing_secret: Option<String>,
    /// Maximum clock skew accepted for signed requests
    pub max_request_age_secs: u64,
    pub delivery: Delivery,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            max_request_age_secs: 300,
            delivery: Delivery::Inline,
        }
    }
}

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Missing field: {0}")]
    MissingField(String),
}

impl ServerConfig {
    /// Parse from a TOML string. Missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Default config file location, if one applies.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TABLEFLIP_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".tableflip").join("config.toml"))
    }

    /// Load defaults, the config file if present, and environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {:?}", path);
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `TABLEFLIP_ADDR` and `SLACK_SIGNING_SECRET`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("TABLEFLIP_ADDR") {
            self.addr = addr;
        }
        if let Some(secret) = lookup("SLACK_SIGNING_SECRET") {
            self.slack.signing_secret = Some(secret);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.addr.trim().is_empty() {
            return Err(ConfigError::MissingField("addr".to_string()));
        }

        if self.slack.max_request_age_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "max_request_age_secs must be positive".to_string(),
            ));
        }

        if matches!(self.slack.signing_secret.as_deref(), Some(s) if s.trim().is_empty()) {
            return Err(ConfigError::MissingField(
                "slack.signing_secret is empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.addr, "127.0.0.1:8000");
        assert_eq!(config.slack.delivery, Delivery::Inline);
        assert!(config.slack.signing_secret.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml(
            r#"
            [slack]
            signing_secret = "shh"
            delivery = "response_url"
            "#,
        )
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8000");
        assert_eq!(config.slack.signing_secret.as_deref(), Some("shh"));
        assert_eq!(config.slack.max_request_age_secs, 300);
        assert_eq!(config.slack.delivery, Delivery::ResponseUrl);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ServerConfig::from_toml("addr = ["),
            Err(ConfigError::Parse(_))
        ));
        assert!(ServerConfig::from_toml("[slack]\ndelivery = \"carrier_pigeon\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "addr = \"0.0.0.0:9000\"").unwrap();
        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file(Path::new("/nonexistent/tableflip.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TABLEFLIP_ADDR", "0.0.0.0:3000"),
            ("SLACK_SIGNING_SECRET", "from-env"),
        ]
        .into_iter()
        .collect();
        let mut config = ServerConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.addr, "0.0.0.0:3000");
        assert_eq!(config.slack.signing_secret.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_validation() {
        let mut config = ServerConfig::default();
        config.slack.max_request_age_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        let mut config = ServerConfig::default();
        config.slack.signing_secret = Some("  ".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        let mut config = ServerConfig::default();
        config.addr = String::new();
        assert!(config.validate().is_err());
    }
}
