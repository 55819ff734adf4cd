//! Runtime configuration for a sync run.
//!
//! Everything the pipeline needs from the environment is read once into a
//! [`SyncConfig`] and passed down explicitly.

use crate::error::{Result, SyncError};
use std::fmt;
use std::path::PathBuf;


pub const API_KEY_ENV_VAR: &str = "API_KEY";
pub const API_HOST_ENV_VAR: &str = "API_HOST";
pub const DB_HOST_ENV_VAR: &str = "DB_HOST";
pub const DB_USER_ENV_VAR: &str = "DB_USER";
pub const DB_PASSWORD_ENV_VAR: &str = "DB_PASSWORD";
pub const DB_NAME_ENV_VAR: &str = "DB_NAME";

/// Base URL of the API-Football RapidAPI gateway.
pub const DEFAULT_API_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com";

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "football_db";

/// Configuration for a single standings sync
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

/// Credentials and endpoint for the standings API
#[derive(Clone)]
pub struct ApiConfig {
    pub key: String,
    pub host: String,
    pub base_url: String,
}

/// Database settings.
///
/// Storage is SQLite, so `host` names the directory holding the database
/// file (`localhost` means the platform cache directory) and `name` is the
/// file stem. `user` and `password` are carried for parity with the
/// environment contract but do not authenticate anything.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl SyncConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Fails with [`SyncError::Config`] when `API_KEY` or `API_HOST` is
    /// missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SyncError::Config {
                    var: var.to_string(),
                })
        };
        let optional = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let api = ApiConfig {
            key: required(API_KEY_ENV_VAR)?,
            host: required(API_HOST_ENV_VAR)?,
            base_url: DEFAULT_API_BASE_URL.to_string(),
        };

        let database = DatabaseConfig {
            host: optional(DB_HOST_ENV_VAR, DEFAULT_DB_HOST),
            user: optional(DB_USER_ENV_VAR, DEFAULT_DB_USER),
            password: optional(DB_PASSWORD_ENV_VAR, ""),
            name: optional(DB_NAME_ENV_VAR, DEFAULT_DB_NAME),
        };

        Ok(Self { api, database })
    }

    /// Point the fetcher at a different server (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }
}

impl DatabaseConfig {
    /// Resolve the SQLite file this configuration refers to.
    pub fn database_path(&self) -> Result<PathBuf> {
        let dir = match self.host.trim() {
            "" | "localhost" | "127.0.0.1" => dirs::cache_dir()
                .ok_or(SyncError::NoCacheDir)?
                .join("standings-sync"),
            host => PathBuf::from(host),
        };
        Ok(dir.join(format!("{}.db", self.name)))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "***"
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &redact(&self.key))
            .field("host", &self.host)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .field("name", &self.name)
            .finish()
    }
}
