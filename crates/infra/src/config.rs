//! Application configuration
//!
//! Resolution order, later wins: built-in defaults, an optional
//! `goalfuel.toml` file, then `GOALFUEL_*` environment variables (with
//! `.env` loaded first via dotenvy).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::InfraError;

const CONFIG_FILE: &str = "goalfuel.toml";
const ENV_DATA_DIR: &str = "GOALFUEL_DATA_DIR";
const ENV_LOG_FILTER: &str = "GOALFUEL_LOG";
const ENV_CONFIG_PATH: &str = "GOALFUEL_CONFIG";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the JSON blob store.
    pub data_dir: PathBuf,
    /// Tracing filter directive, e.g. `info` or `goalfuel_core=debug`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), log_filter: "info".into() }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    log_filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from `.env`, the config file and the environment.
    pub fn load() -> Result<Self, InfraError> {
        // A missing .env is the normal case outside development.
        dotenvy::dotenv().ok();

        let path = env::var(ENV_CONFIG_PATH).map(PathBuf::from).unwrap_or_else(|_| CONFIG_FILE.into());
        let mut config = Self::default();
        config.apply_file(&path)?;
        config.apply_env();
        debug!(data_dir = %config.data_dir.display(), filter = %config.log_filter, "configuration resolved");
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), InfraError> {
        if !path.exists() {
            return Ok(());
        }
        let raw = fs::read_to_string(path).map_err(|err| {
            InfraError::Config(format!("read {}: {err}", path.display()))
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|err| {
            InfraError::Config(format!("parse {}: {err}", path.display()))
        })?;
        if let Some(data_dir) = file.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(log_filter) = file.log_filter {
            self.log_filter = log_filter;
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(data_dir) = env::var(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(filter) = env::var(ENV_LOG_FILTER) {
            self.log_filter = filter;
        }
    }
}
