//! Configuration handling for the collection tools.
//!
//! Everything is read from environment variables with defaults that point at
//! the public encyclopedia API. `Config::from_env` performs the loading and
//! validates the values that need parsing.

use std::env;
use std::time::Duration;

/// Environment variable names. Public so tests and scripts can refer to them.
pub const ENV_API_ENDPOINT: &str = "HARVEST_API_ENDPOINT";
pub const ENV_USER_AGENT: &str = "HARVEST_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "HARVEST_CONNECT_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "HARVEST_LOG_FORMAT";

/// Placeholder in the endpoint template that is replaced by the locale tag.
pub const LOCALE_PLACEHOLDER: &str = "{lang}";

const DEFAULT_API_ENDPOINT: &str = "https://{lang}.wikipedia.org/w/api.php";
const DEFAULT_USER_AGENT: &str = concat!("harvest/", env!("CARGO_PKG_VERSION"));
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Output format of the tracing subscriber installed by the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration shared by the collector, culler and reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_endpoint: String,
    user_agent: String,
    connect_timeout_secs: u64,
    log_format: LogFormat,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        api_endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        connect_timeout_secs: u64,
        log_format: LogFormat,
    ) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            user_agent: user_agent.into(),
            connect_timeout_secs,
            log_format,
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_endpoint =
            env::var(ENV_API_ENDPOINT).unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let connect_timeout_secs = match env::var(ENV_CONNECT_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => parse_log_format(&raw)?,
            Err(_) => LogFormat::Text,
        };

        Ok(Self {
            api_endpoint,
            user_agent,
            connect_timeout_secs,
            log_format,
        })
    }

    /// Endpoint template; may contain `{lang}`.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
    /// User-Agent header sent with every API request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_API_ENDPOINT,
            DEFAULT_USER_AGENT,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            LogFormat::Text,
        )
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field: ENV_CONNECT_TIMEOUT_SECS,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(secs),
        Err(e) => Err(ConfigError::InvalidValue {
            field: ENV_CONNECT_TIMEOUT_SECS,
            reason: e.to_string(),
        }),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidValue {
            field: ENV_LOG_FORMAT,
            reason: format!("expected 'text' or 'json', got '{}'", other),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
