//! Runtime configuration
//!
//! Resolved from command-line flags, environment variables, and platform
//! defaults, in that order.

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

// Environment variable names
pub const ENV_DB_PATH: &str = "VISITLOG_DB";
pub const ENV_LOG: &str = "VISITLOG_LOG";
const ENV_RUST_LOG: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Load from the process environment, letting `db_override` (the `--db` flag) win
    pub fn load(db_override: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup(db_override, |key| env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup
    pub fn from_lookup<F>(db_override: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match db_override {
            Some(path) => path,
            None => match non_empty(ENV_DB_PATH) {
                Some(path) => PathBuf::from(path),
                None => default_db_path()?,
            },
        };

        let log_filter = non_empty(ENV_LOG)
            .or_else(|| non_empty(ENV_RUST_LOG))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path,
            log_filter,
        })
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
    Ok(config_dir.join("visitlog").join("visits.db"))
}
