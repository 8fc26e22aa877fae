//! Application context for the Jokebox CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;
use std::time::Duration;

use once_cell::unsync::OnceCell;

use jokebox_core::{
    FileBackend, HistoryLedger, JokeClient, JsonStore, RatedLedger, RecentJokes,
};

use crate::cli::Cli;
use crate::config::{read_config_or_default, JokeboxConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_api_url, resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<JokeboxConfig>,
    store: OnceCell<JsonStore<FileBackend>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            store: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&JokeboxConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            let config = read_config_or_default(&path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the on-disk store (once per invocation).
    pub fn store(&self) -> anyhow::Result<&JsonStore<FileBackend>> {
        self.store.get_or_try_init(|| {
            let dir = self.data_dir()?;
            let backend = FileBackend::open(&dir)
                .map_err(|e| anyhow::anyhow!("Failed to open data directory {}: {}", dir.display(), e))?
                .with_quota(self.config()?.storage.quota_bytes);
            Ok(JsonStore::new(backend))
        })
    }

    pub fn rated_ledger(&self) -> anyhow::Result<RatedLedger<FileBackend>> {
        Ok(RatedLedger::open(self.store()?.clone()))
    }

    pub fn history_ledger(&self) -> anyhow::Result<HistoryLedger<FileBackend>> {
        Ok(HistoryLedger::open(self.store()?.clone()))
    }

    pub fn recent_jokes(&self) -> anyhow::Result<RecentJokes<FileBackend>> {
        Ok(RecentJokes::open(self.store()?.clone()))
    }

    pub fn client(&self) -> anyhow::Result<JokeClient> {
        let config = self.config()?;
        let base_url = resolve_api_url(config);
        let client = match config.api.timeout_secs {
            Some(secs) => JokeClient::with_timeout(base_url, Duration::from_secs(secs))?,
            None => JokeClient::new(base_url),
        };
        Ok(client)
    }

    /// UI context from the global output flags and config.
    pub fn ui_context(&self) -> UiContext {
        let color_disabled = self
            .config()
            .ok()
            .and_then(|c| c.ui.color)
            .map(|enabled| !enabled)
            .unwrap_or(false);
        UiContext::from_env(
            self.cli.json,
            self.cli.format.as_deref(),
            self.cli.no_color || color_disabled,
            self.cli.ascii,
        )
    }
}
