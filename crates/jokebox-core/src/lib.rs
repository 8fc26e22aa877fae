//! # Jokebox Core
//!
//! Core library for Jokebox - search, rate, favorite and share jokes from a
//! public joke catalog, with all user state kept in local storage.
//!
//! This crate provides the domain model, the durable key-value store adapter,
//! the favorites and search-history ledgers, the category filter engine and
//! the catalog client, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Key-value backends and the typed JSON store adapter
//! - **model**: Joke, rated joke and history records
//! - **ledger**: Rated-jokes, search-history and recent-jokes ledgers
//! - **filter**: Category statistics and category/rating selectors
//! - **client**: Read-only joke catalog client
//! - **share**: Share text and link builders
//! - **text**: Search-term highlighting

pub mod client;
pub mod error;
pub mod filter;
pub mod fs;
pub mod ledger;
pub mod model;
pub mod share;
pub mod storage;
pub mod text;

pub use client::{JokeClient, RequestGuard, RequestToken, DEFAULT_BASE_URL};
pub use error::{JokeboxError, Result};
pub use filter::{compute_stats, filter_by_category, CategorySelector, CategoryStats, RatingSelector};
pub use ledger::{FavoritesFilter, FavoritesStats, HistoryLedger, RatedLedger, RatingChange, RecentJokes};
pub use model::{HistoryEntry, Joke, RatedJoke, SearchResponse};
pub use storage::{FileBackend, JsonStore, KeyValueBackend, MemoryBackend, StorageError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
