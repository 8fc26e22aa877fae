//! Config, data directory and endpoint resolution.
//!
//! Precedence everywhere: CLI flag > environment > config file > default.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, JokeboxConfig};

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("JOKEBOX_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// `--data-dir` (which clap also fills from `JOKEBOX_DATA_DIR`), then config.
pub fn resolve_data_dir(cli: &Cli, config: &JokeboxConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

pub fn resolve_api_url(config: &JokeboxConfig) -> String {
    std::env::var("JOKEBOX_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.api.base_url.clone())
}
