//! Configuration loading and typed config structures for the city admin.
//!
//! The configuration lives in `nibog-admin.yaml` next to the binary's
//! working directory. Every field has a default so a missing file, or a
//! file that only sets a few keys, still yields a usable config.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

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

    /// An environment override held a value of the wrong shape.
    #[error("invalid value for {name}: {value}")]
    InvalidEnv {
        /// Environment variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level admin configuration.
///
/// Mirrors the structure of `nibog-admin.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdminConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated request timing.
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AdminConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `NIBOG_HOST` overrides `server.host`
    /// - `NIBOG_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if an override does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// Environment overrides are not applied here; see [`Self::from_file`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Override listener settings with environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `NIBOG_PORT` is not a port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("NIBOG_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("NIBOG_PORT") {
            self.port = val
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
                    name: "NIBOG_PORT",
                    value: format!("{val} ({e})"),
                })?;
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Timing of the simulated requests standing in for a real backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatencyConfig {
    /// Delay applied to every create, update, and delete, in milliseconds.
    #[serde(default = "default_request_ms")]
    pub request_ms: u64,

    /// How long the edit form's "saved" indicator stays up, in milliseconds.
    #[serde(default = "default_saved_indicator_ms")]
    pub saved_indicator_ms: u64,
}

impl LatencyConfig {
    /// Configuration with no simulated delay at all.
    pub const fn instant() -> Self {
        Self {
            request_ms: 0,
            saved_indicator_ms: 0,
        }
    }

    /// The simulated request delay.
    pub const fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    /// Lifetime of the "saved" indicator.
    pub const fn saved_indicator(&self) -> Duration {
        Duration::from_millis(self.saved_indicator_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            request_ms: default_request_ms(),
            saved_indicator_ms: default_saved_indicator_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_ms() -> u64 {
    1000
}

const fn default_saved_indicator_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    String::from("info")
}
