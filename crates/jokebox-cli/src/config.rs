use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jokebox_core::storage::DEFAULT_QUOTA_BYTES;
use jokebox_core::DEFAULT_BASE_URL;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JokeboxConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    pub color: Option<bool>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_quota_bytes() -> u64 {
    DEFAULT_QUOTA_BYTES
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Read the config file, or defaults if it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<JokeboxConfig> {
    if !path.exists() {
        return Ok(JokeboxConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<JokeboxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("jokebox"));
        }
    }
    Ok(home_dir()?.join(".config").join("jokebox"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("jokebox"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("jokebox"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
