use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use jokebox_core::storage::{RATED_JOKES_KEY, SEARCH_HISTORY_KEY};
use jokebox_core::{
    FavoritesFilter, FileBackend, HistoryLedger, Joke, JsonStore, KeyValueBackend, RatedLedger,
};

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let dirname = format!("{}_{}_{}", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(dirname);
        Self { path }
    }

    fn store(&self) -> JsonStore<FileBackend> {
        JsonStore::new(FileBackend::open(&self.path).expect("open should succeed"))
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[test]
fn test_favorites_survive_restart() {
    let temp = TempDir::new("jokebox_favorites");

    let mut ledger = RatedLedger::open(temp.store());
    ledger
        .upsert_rating(&Joke::new("a1", "first").with_categories(["dev"]), 5)
        .expect("rating should succeed");
    let viewed_at = ledger.get("a1").expect("tracked").viewed_at;
    ledger
        .upsert_rating(&Joke::new("a1", "first"), 3)
        .expect("re-rating should succeed");
    drop(ledger);

    let reopened = RatedLedger::open(temp.store());
    let favorites = reopened.list_favorites(&FavoritesFilter::new());
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].rating, 3);
    assert_eq!(favorites[0].viewed_at, viewed_at);
    assert!(temp.path.join(format!("{}.json", RATED_JOKES_KEY)).exists());
}

#[test]
fn test_history_survives_restart() {
    let temp = TempDir::new("jokebox_history");

    let mut history = HistoryLedger::open(temp.store());
    history.record("chuck");
    history.record("norris");
    history.record("chuck");
    drop(history);

    let reopened = HistoryLedger::open(temp.store());
    let terms: Vec<&str> = reopened.list().iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["chuck", "norris"]);
}

#[test]
fn test_corrupt_file_falls_back_to_empty() {
    let temp = TempDir::new("jokebox_corrupt");
    let backend = FileBackend::open(&temp.path).expect("open should succeed");
    backend
        .set(SEARCH_HISTORY_KEY, "not json at all")
        .expect("raw write should succeed");

    let mut history = HistoryLedger::open(JsonStore::new(backend));
    assert!(history.is_empty());

    // The next mutation overwrites the corrupt document.
    history.record("recovered");
    let reopened = HistoryLedger::open(temp.store());
    assert_eq!(reopened.list()[0].term, "recovered");
}
