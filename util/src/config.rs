//! Application configuration.
//!
//! `AppConfig` is loaded once at startup from `.env` and the process
//! environment, then passed by value into [`crate::state::AppState`]. Nothing
//! reads configuration from a global afterwards, so tests can build their own
//! config with [`AppConfig::for_tests`] or [`AppConfig::from_lookup`].

use std::env;
use thiserror::Error;

pub const DEFAULT_PROJECT_NAME: &str = "K-12 LMS API";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
/// Every workspace crate that emits `tracing` events at info level.
pub const DEFAULT_LOG_DIRECTIVE: &str = "api=info,services=info,marker=info,db=info";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Represents the complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub version: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: i64,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// `JWT_SECRET` is the only required variable; everything else has a
    /// development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        Ok(Self {
            env: get_or("APP_ENV", "development"),
            project_name: get_or("PROJECT_NAME", DEFAULT_PROJECT_NAME),
            version: get_or("API_VERSION", DEFAULT_VERSION),
            log_level: get_or("LOG_LEVEL", DEFAULT_LOG_DIRECTIVE),
            log_file: get_or("LOG_FILE", "api.log"),
            log_to_stdout: get_or("LOG_TO_STDOUT", "false") == "true",
            database_url: get_or("DATABASE_URL", "sqlite://data/lms.db?mode=rwc"),
            host: get_or("HOST", "127.0.0.1"),
            port: parse(&lookup, "PORT", 8000)?,
            jwt_secret: lookup("JWT_SECRET")
                .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".into()))?,
            jwt_duration_minutes: parse(&lookup, "JWT_DURATION_MINUTES", 30)?,
            cors_origins: split_origins(&get_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }

    /// Deterministic configuration for test suites (in-memory database).
    pub fn for_tests() -> Self {
        Self {
            env: "test".into(),
            project_name: DEFAULT_PROJECT_NAME.into(),
            version: DEFAULT_VERSION.into(),
            log_level: "api=debug".into(),
            log_file: "test.log".into(),
            log_to_stdout: false,
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "test-secret-key-with-at-least-32-chars".into(),
            jwt_duration_minutes: 30,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

fn parse<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
