//! Process configuration.
//!
//! Read from the environment once per invocation — the Postgres provider
//! calls [`Config::from_env`] on every store acquisition, so a changed
//! `DATABASE_URL` takes effect on the next request without a restart.

use std::env;
use std::fmt;

const SCHEMA_VAR: &str = "MAIN_DB_SCHEMA";
const DATABASE_URL_VAR: &str = "DATABASE_URL";
const DEFAULT_SCHEMA: &str = "public";

/// Datastore configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Schema placed on the connection's `search_path`.
    pub schema: String,
}

impl Config {
    /// Build a config from explicit values.
    pub fn new(database_url: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            schema: schema.into(),
        }
    }

    /// Read `DATABASE_URL` (required) and `MAIN_DB_SCHEMA` (defaults to
    /// `public`) from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let schema = env::var(SCHEMA_VAR).unwrap_or_else(|_| DEFAULT_SCHEMA.to_string());
        Ok(Self {
            database_url,
            schema,
        })
    }
}

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingDatabaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDatabaseUrl => write!(f, "DATABASE_URL is not set"),
        }
    }
}

impl std::error::Error for ConfigError {}
