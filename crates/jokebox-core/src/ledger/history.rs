//! Search-history ledger: a bounded, most-recent-first log of distinct terms.

use chrono::{DateTime, Utc};

use crate::model::{searchable_term, HistoryEntry};
use crate::storage::{JsonStore, KeyValueBackend, SEARCH_HISTORY_KEY};

/// Maximum number of remembered terms.
pub const HISTORY_CAP: usize = 10;

#[derive(Debug)]
pub struct HistoryLedger<B> {
    store: JsonStore<B>,
    entries: Vec<HistoryEntry>,
}

impl<B: KeyValueBackend> HistoryLedger<B> {
    /// Hydrate the log from durable storage.
    pub fn open(store: JsonStore<B>) -> Self {
        let mut ledger = Self {
            store,
            entries: Vec::new(),
        };
        ledger.reload();
        ledger
    }

    /// Re-read the durable copy, dropping in-memory state.
    pub fn reload(&mut self) {
        let mut entries: Vec<HistoryEntry> = self.store.read(SEARCH_HISTORY_KEY, Vec::new());
        // Keep the first (most recent) copy of a repeated term.
        let mut seen = std::collections::HashSet::new();
        entries.retain(|entry| seen.insert(entry.term.clone()));
        entries.truncate(HISTORY_CAP);
        self.entries = entries;
    }

    /// Record a search for `term` now.
    ///
    /// Returns `false` (and changes nothing) when the trimmed term is shorter
    /// than the minimum search length.
    pub fn record(&mut self, term: &str) -> bool {
        self.record_at(term, Utc::now())
    }

    pub fn record_at(&mut self, term: &str, now: DateTime<Utc>) -> bool {
        let Some(term) = searchable_term(term) else {
            return false;
        };

        if let Some(pos) = self.entries.iter().position(|entry| entry.term == term) {
            let mut entry = self.entries.remove(pos);
            entry.timestamp = now;
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(
                0,
                HistoryEntry {
                    term: term.to_string(),
                    timestamp: now,
                },
            );
            self.entries.truncate(HISTORY_CAP);
        }

        tracing::debug!(term, size = self.entries.len(), "recorded search");
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Entries, most recent first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        self.store.write(SEARCH_HISTORY_KEY, &self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use chrono::Duration;

    fn ledger() -> (HistoryLedger<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        (HistoryLedger::open(JsonStore::new(backend.clone())), backend)
    }

    fn terms<B: KeyValueBackend>(ledger: &HistoryLedger<B>) -> Vec<&str> {
        ledger.list().iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn test_short_terms_are_ignored() {
        let (mut history, backend) = ledger();
        assert!(!history.record("ab"));
        assert!(!history.record("   a  "));
        assert!(!history.record(""));
        assert!(history.is_empty());
        assert_eq!(backend.raw(SEARCH_HISTORY_KEY), None);
    }

    #[test]
    fn test_reload_drops_repeated_terms() {
        let backend = MemoryBackend::new();
        backend
            .set(
                SEARCH_HISTORY_KEY,
                r#"[{"term":"chuck","timestamp":"2024-03-03T00:00:00Z"},
                    {"term":"norris","timestamp":"2024-03-02T00:00:00Z"},
                    {"term":"chuck","timestamp":"2024-03-01T00:00:00Z"}]"#,
            )
            .unwrap();

        let mut history = HistoryLedger::open(JsonStore::new(backend));
        assert_eq!(terms(&history), vec!["chuck", "norris"]);

        history.record("norris");
        assert_eq!(terms(&history), vec!["norris", "chuck"]);
    }

    #[test]
    fn test_terms_are_trimmed() {
        let (mut history, _) = ledger();
        assert!(history.record("  chuck  "));
        assert_eq!(terms(&history), vec!["chuck"]);
    }

    #[test]
    fn test_re_recording_moves_to_front_without_duplicate() {
        let (mut history, _) = ledger();
        let t0 = Utc::now();
        history.record_at("chuck", t0);
        history.record_at("norris", t0 + Duration::seconds(1));
        history.record_at("chuck", t0 + Duration::seconds(2));

        assert_eq!(terms(&history), vec!["chuck", "norris"]);
        assert_eq!(history.list()[0].timestamp, t0 + Duration::seconds(2));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let (mut history, _) = ledger();
        history.record("Chuck");
        history.record("chuck");
        assert_eq!(terms(&history), vec!["chuck", "Chuck"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let (mut history, _) = ledger();
        for i in 0..11 {
            history.record(&format!("term{:02}", i));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        let expected: Vec<String> = (1..11).rev().map(|i| format!("term{:02}", i)).collect();
        assert_eq!(terms(&history), expected);
    }

    #[test]
    fn test_state_survives_reopen() {
        let (mut history, backend) = ledger();
        history.record("chuck");
        history.record("norris");

        let reopened = HistoryLedger::open(JsonStore::new(backend));
        assert_eq!(terms(&reopened), vec!["norris", "chuck"]);
    }

    #[test]
    fn test_clear_persists_empty_log() {
        let (mut history, backend) = ledger();
        history.record("chuck");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(backend.raw(SEARCH_HISTORY_KEY).as_deref(), Some("[]"));
    }
}
