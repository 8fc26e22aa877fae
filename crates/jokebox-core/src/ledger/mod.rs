//! Durably-backed ledgers.
//!
//! Each ledger keeps its records in memory, mutates them only through
//! `&mut self`, and writes the full snapshot back to its [`JsonStore`]
//! immediately after every change. Two rapid mutations therefore always
//! build on each other instead of racing on stale copies.
//!
//! [`JsonStore`]: crate::storage::JsonStore

mod history;
mod rated;
mod recent;

pub use history::{HistoryLedger, HISTORY_CAP};
pub use rated::{FavoritesFilter, FavoritesStats, RatedLedger, RatingChange};
pub use recent::{RecentJokes, RECENT_CAP};
