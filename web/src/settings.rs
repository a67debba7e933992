use std::env;

use thiserror::Error;

use db::{StoreConfig, DEFAULT_DATABASE_PATH};

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("{} must be a positive number, got '{}'.", key, value)]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub store: StoreConfig,
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// - `BIBLES_DB_PATH`: SQLite database file (default `bibles.db`)
    /// - `HOST`, `PORT`: address to bind (default `0.0.0.0:8080`)
    /// - `WORKERS`: number of HTTP workers (default: one per CPU)
    /// - `SENTRY_DSN`: enables error reporting when set
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            store: StoreConfig::new(
                var("BIBLES_DB_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            ),
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number("PORT", var("PORT"))?.unwrap_or(8080),
            workers: parse_number("WORKERS", var("WORKERS"))?.unwrap_or_else(num_cpus::get),
            sentry_dsn: var("SENTRY_DSN"),
        })
    }
}

fn parse_number<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, SettingsError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    value
        .map(|v| match v.trim().parse::<T>() {
            Ok(n) if n != T::default() => Ok(n),
            _ => Err(SettingsError::InvalidNumber { key, value: v }),
        })
        .transpose()
}
