//! Application configuration loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use finders::FinderError;
use thiserror::Error;

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable required by the selected backend is not set.
    #[error("{0} must be set when FINDER_BACKEND=http")]
    Missing(&'static str),

    /// A remote deal source could not be constructed.
    #[error("failed to build deal source: {0}")]
    Finder(#[from] FinderError),
}

/// Where the finders get their deals from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderBackend {
    /// The seeded in-memory demo catalog.
    #[default]
    Memory,
    /// Remote JSON endpoints, one per category.
    Http,
}

impl FromStr for FinderBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(FinderBackend::Memory),
            "http" => Ok(FinderBackend::Http),
            _ => Err(ConfigError::Invalid {
                var: "FINDER_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid {
                var: "LOG_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `FINDER_BACKEND` — `memory` or `http` (default: `memory`)
/// - `FLIGHTS_URL`, `HOTELS_URL`, `ACTIVITIES_URL` — deal endpoints for `http`
/// - `FINDER_TIMEOUT_MS` — request timeout of the `http` finders (default: `5000`)
/// - `SIMULATED_LATENCY_MS` — upper bound of random delay added by the
///   `memory` finders (default: `0`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub finder_backend: FinderBackend,
    pub flights_url: Option<String>,
    pub hotels_url: Option<String>,
    pub activities_url: Option<String>,
    pub finder_timeout: Duration,
    pub simulated_latency: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup, falling
    /// back to defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: parse_var(&lookup, "LOG_FORMAT")?.unwrap_or(defaults.log_format),
            finder_backend: parse_var(&lookup, "FINDER_BACKEND")?
                .unwrap_or(defaults.finder_backend),
            flights_url: lookup("FLIGHTS_URL"),
            hotels_url: lookup("HOTELS_URL"),
            activities_url: lookup("ACTIVITIES_URL"),
            finder_timeout: parse_var::<u64, _>(&lookup, "FINDER_TIMEOUT_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.finder_timeout),
            simulated_latency: parse_var::<u64, _>(&lookup, "SIMULATED_LATENCY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the selected backend has everything it needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.finder_backend == FinderBackend::Http {
            if self.flights_url.is_none() {
                return Err(ConfigError::Missing("FLIGHTS_URL"));
            }
            if self.hotels_url.is_none() {
                return Err(ConfigError::Missing("HOTELS_URL"));
            }
            if self.activities_url.is_none() {
                return Err(ConfigError::Missing("ACTIVITIES_URL"));
            }
        }
        if self.finder_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "FINDER_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            finder_backend: FinderBackend::Memory,
            flights_url: None,
            hotels_url: None,
            activities_url: None,
            finder_timeout: Duration::from_millis(5000),
            simulated_latency: Duration::ZERO,
        }
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
