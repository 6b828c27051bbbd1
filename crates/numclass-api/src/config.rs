//! Configuration loading and typed config structures for the service.
//!
//! Configuration lives in an optional YAML file (`numclass-config.yaml`
//! in the working directory, or the path named by `NUMCLASS_CONFIG`). Every
//! field has a default, so the file, any section, or any key may be
//! omitted. Environment variables override file values after parsing.

use std::path::{Path, PathBuf};

use numclass_facts::TriviaConfig;
use serde::Deserialize;

use crate::server::ServerConfig;

/// Config file consulted when `NUMCLASS_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "numclass-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid environment override {name}: {message}")]
    Env {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Input acceptance limits.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// External trivia lookup settings.
    #[serde(default)]
    pub trivia: TriviaConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration for the running process.
    ///
    /// Reads the file named by `NUMCLASS_CONFIG`, falling back to
    /// [`DEFAULT_CONFIG_PATH`]. A missing file yields the defaults. In both
    /// cases environment overrides are applied and the result validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, an
    /// override is malformed, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("NUMCLASS_CONFIG")
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML file at the given path.
    ///
    /// No environment overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// No environment overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::from_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override file values with variables resolved through `lookup`.
    ///
    /// Recognized variables: `HOST`, `PORT`, `MAX_MAGNITUDE`,
    /// `TRIVIA_BASE_URL`, `TRIVIA_TIMEOUT_MS`, `LOG_LEVEL`, `LOG_FORMAT`.
    /// `lookup` is normally `std::env::var`; tests pass a map instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if a numeric or enum value is malformed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PORT") {
            self.server.port = parse_env("PORT", &val)?;
        }
        if let Some(val) = lookup("MAX_MAGNITUDE") {
            self.classifier.max_magnitude = parse_env("MAX_MAGNITUDE", &val)?;
        }
        if let Some(val) = lookup("TRIVIA_BASE_URL") {
            self.trivia.base_url = val;
        }
        if let Some(val) = lookup("TRIVIA_TIMEOUT_MS") {
            self.trivia.timeout_ms = parse_env("TRIVIA_TIMEOUT_MS", &val)?;
        }
        if let Some(val) = lookup("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = lookup("LOG_FORMAT") {
            self.logging.format = match val.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::Env {
                        name: "LOG_FORMAT",
                        message: format!("unknown format {other:?}, expected pretty or json"),
                    })
                }
            };
        }
        Ok(())
    }

    /// Reject configurations the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".to_owned()));
        }
        if self.trivia.enabled && self.trivia.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "trivia.base_url must not be empty when trivia is enabled".to_owned(),
            ));
        }
        if self.trivia.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "trivia.timeout_ms must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
        name,
        message: format!("{value:?}: {e}"),
    })
}

/// Input acceptance limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierConfig {
    /// Largest accepted `|number|`. Larger inputs are rejected as too large.
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_magnitude: default_max_magnitude(),
        }
    }
}

const fn default_max_magnitude() -> u64 {
    1_000_000_000
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error), used
    /// when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
