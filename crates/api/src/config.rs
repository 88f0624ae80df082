use std::env;
use std::str::FromStr;

use infra::DbConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("NODE_ENV must be one of `development` or `production`, got `{0}`")]
    InvalidRunMode(String),

    #[error("{key} must be a number, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn is_production(self) -> bool {
        matches!(self, RunMode::Production)
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(RunMode::Development),
            "production" => Ok(RunMode::Production),
            other => Err(ConfigError::InvalidRunMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub introspection: bool,
    /// Query depth and complexity bounds. Unset means unbounded.
    pub max_depth: Option<usize>,
    pub max_complexity: Option<usize>,
}

impl Config {
    /// Read the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode: RunMode = lookup("NODE_ENV")
            .ok_or(ConfigError::Missing("NODE_ENV"))?
            .parse()?;

        let port = parse_number(&lookup, "PORT", 4000)?;
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections = parse_number(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;

        let skip_migrations = lookup("SKIP_MIGRATIONS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        // Introspection follows the run mode unless set explicitly.
        let introspection = lookup("GQL_INTROSPECTION")
            .map(|v| v == "true")
            .unwrap_or(!mode.is_production());

        let max_depth = parse_optional_number(&lookup, "GQL_MAX_DEPTH")?;
        let max_complexity = parse_optional_number(&lookup, "GQL_MAX_COMPLEXITY")?;

        Ok(Self {
            mode,
            port,
            database_url,
            database_max_connections,
            skip_migrations,
            introspection,
            max_depth,
            max_complexity,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            log_statements: !self.mode.is_production(),
        }
    }
}

fn parse_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_optional_number(lookup, key)?.unwrap_or(default))
}

fn parse_optional_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(None),
    }
}
