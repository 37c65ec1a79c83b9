//! Configuration module for the calendar backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default seed admin account, matching the account the frontend ships with.
pub const DEFAULT_ADMIN_NICKNAME: &str = "suhyeon";
pub const DEFAULT_ADMIN_PASSWORD: &str = "ajs345";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Seed admin account inserted on first initialization
    pub admin: SeedAdmin,
}

/// Credentials of the pre-approved administrator row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAdmin {
    pub nickname: String,
    pub password: String,
}

impl Default for SeedAdmin {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_ADMIN_NICKNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

/// Raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.variable)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("CALENDAR_DB_PATH")
            .unwrap_or_else(|_| "./data/calendar.sqlite".to_string())
            .into();

        let raw_addr =
            env::var("CALENDAR_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError {
            variable: "CALENDAR_BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let log_level = env::var("CALENDAR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let admin = SeedAdmin {
            nickname: env::var("CALENDAR_ADMIN_NICKNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_NICKNAME.to_string()),
            password: env::var("CALENDAR_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            admin,
        })
    }
}
