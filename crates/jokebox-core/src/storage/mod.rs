//! Durable key-value storage.
//!
//! Business logic never touches a backend directly: ledgers go through
//! [`JsonStore`], which owns the typed (de)serialization and the
//! fall-back-and-log policy.

mod file;
mod json_store;
mod memory;
mod traits;

pub use file::FileBackend;
pub use json_store::JsonStore;
pub use memory::MemoryBackend;
pub use traits::{validate_key, KeyValueBackend, StorageError, StorageResult};

/// Key holding the rated-jokes ledger.
pub const RATED_JOKES_KEY: &str = "rated-jokes";

/// Key holding the search-history ledger.
pub const SEARCH_HISTORY_KEY: &str = "search-history";

/// Key holding recently displayed jokes.
pub const RECENT_JOKES_KEY: &str = "recent-jokes";

/// Default capacity, matching what browsers typically grant one origin.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;
