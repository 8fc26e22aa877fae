//! Rated-jokes ledger: user ratings keyed by joke id.
//!
//! `viewed_at` is set once, when a joke is first favorited, and is never
//! moved by later re-ratings. Entries rated down to 0 keep their slot but
//! stop counting as favorites.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{JokeboxError, Result};
use crate::filter::{compute_stats, CategorySelector, CategoryStats, RatingSelector};
use crate::model::{Joke, RatedJoke, MAX_RATING};
use crate::storage::{JsonStore, KeyValueBackend, RATED_JOKES_KEY};

/// Outcome of [`RatedLedger::upsert_rating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    /// New entry created
    Inserted,
    /// Existing entry re-rated
    Updated { previous: i32 },
    /// Nothing to do (unrating an untracked joke, or same rating)
    Unchanged,
}

/// Filter for [`RatedLedger::list_favorites`].
#[derive(Debug, Clone, Default)]
pub struct FavoritesFilter {
    pub rating: RatingSelector,
    pub category: CategorySelector,
}

impl FavoritesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(mut self, rating: RatingSelector) -> Self {
        self.rating = rating;
        self
    }

    pub fn category(mut self, category: CategorySelector) -> Self {
        self.category = category;
        self
    }
}

/// Aggregate view over the favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FavoritesStats {
    pub total_favorites: usize,
    /// Index 0 holds the count of 1-star favorites
    pub rating_counts: [usize; MAX_RATING as usize],
    pub categories: CategoryStats,
}

#[derive(Debug)]
pub struct RatedLedger<B> {
    store: JsonStore<B>,
    entries: Vec<RatedJoke>,
}

impl<B: KeyValueBackend> RatedLedger<B> {
    /// Hydrate the ledger from durable storage.
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
        let mut entries: Vec<RatedJoke> = self.store.read(RATED_JOKES_KEY, Vec::new());
        // A hand-edited document could repeat an id; the first one wins.
        let mut seen = std::collections::HashSet::new();
        entries.retain(|entry| seen.insert(entry.joke.id.clone()));
        self.entries = entries;
    }

    /// Rate `joke` now. See [`upsert_rating_at`](Self::upsert_rating_at).
    pub fn upsert_rating(&mut self, joke: &Joke, rating: i32) -> Result<RatingChange> {
        self.upsert_rating_at(joke, rating, Utc::now())
    }

    /// Rate `joke`, using `now` as the favorite timestamp for new entries.
    ///
    /// # Errors
    ///
    /// Returns `JokeboxError::Validation` if `rating` is above the maximum or
    /// the joke record is malformed.
    pub fn upsert_rating_at(
        &mut self,
        joke: &Joke,
        rating: i32,
        now: DateTime<Utc>,
    ) -> Result<RatingChange> {
        if rating > MAX_RATING {
            return Err(JokeboxError::Validation(format!(
                "rating must be at most {}: {}",
                MAX_RATING, rating
            )));
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.joke.id == joke.id) {
            let previous = entry.rating;
            if previous == rating {
                return Ok(RatingChange::Unchanged);
            }
            entry.rating = rating;
            tracing::debug!(id = %joke.id, previous, rating, "re-rated joke");
            self.persist();
            return Ok(RatingChange::Updated { previous });
        }

        if rating <= 0 {
            return Ok(RatingChange::Unchanged);
        }

        joke.validate()?;
        self.entries.push(RatedJoke::new(joke.clone(), rating, now));
        tracing::debug!(id = %joke.id, rating, "favorited joke");
        self.persist();
        Ok(RatingChange::Inserted)
    }

    /// Drop the entry for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.joke.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Stored rating, or 0 for untracked jokes.
    pub fn rating_of(&self, id: &str) -> i32 {
        self.get(id).map(|entry| entry.rating).unwrap_or(0)
    }

    pub fn get(&self, id: &str) -> Option<&RatedJoke> {
        self.entries.iter().find(|entry| entry.joke.id == id)
    }

    /// All tracked entries, including unrated ones, in insertion order.
    pub fn entries(&self) -> &[RatedJoke] {
        &self.entries
    }

    /// Favorites matching `filter`, most recently favorited first.
    pub fn list_favorites(&self, filter: &FavoritesFilter) -> Vec<&RatedJoke> {
        let mut favorites: Vec<&RatedJoke> = self
            .entries
            .iter()
            .filter(|entry| entry.is_favorite())
            .filter(|entry| filter.rating.matches(entry.rating))
            .filter(|entry| filter.category.matches(*entry))
            .collect();
        favorites.sort_by(|a, b| b.viewed_at.cmp(&a.viewed_at));
        favorites
    }

    pub fn stats(&self) -> FavoritesStats {
        let favorites: Vec<&RatedJoke> = self.entries.iter().filter(|e| e.is_favorite()).collect();
        let mut rating_counts = [0usize; MAX_RATING as usize];
        for entry in &favorites {
            // Ratings are capped on write; clamp in case the document was edited by hand.
            let index = (entry.rating.min(MAX_RATING) - 1) as usize;
            rating_counts[index] += 1;
        }

        FavoritesStats {
            total_favorites: favorites.len(),
            rating_counts,
            categories: compute_stats(&favorites),
        }
    }

    fn persist(&self) {
        self.store.write(RATED_JOKES_KEY, &self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use chrono::Duration;

    fn ledger() -> (RatedLedger<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        (RatedLedger::open(JsonStore::new(backend.clone())), backend)
    }

    fn joke(id: &str) -> Joke {
        Joke::new(id, format!("joke {}", id))
    }

    fn ids(entries: &[&RatedJoke]) -> Vec<String> {
        entries.iter().map(|e| e.joke.id.clone()).collect()
    }

    #[test]
    fn test_rating_round_trip() {
        let (mut ledger, _) = ledger();
        for rating in 1..=5 {
            let j = joke(&format!("r{}", rating));
            ledger.upsert_rating(&j, rating).unwrap();
            assert_eq!(ledger.rating_of(&j.id), rating);
        }
        assert_eq!(ledger.rating_of("untracked"), 0);
    }

    #[test]
    fn test_rerating_keeps_first_timestamp() {
        let (mut ledger, _) = ledger();
        let first = Utc::now() - Duration::hours(2);
        let later = Utc::now();

        assert_eq!(
            ledger.upsert_rating_at(&joke("a1"), 5, first).unwrap(),
            RatingChange::Inserted
        );
        let favorites = ledger.list_favorites(&FavoritesFilter::new());
        assert_eq!(ids(&favorites), vec!["a1"]);
        assert_eq!(favorites[0].rating, 5);

        assert_eq!(
            ledger.upsert_rating_at(&joke("a1"), 3, later).unwrap(),
            RatingChange::Updated { previous: 5 }
        );
        let entry = ledger.get("a1").unwrap();
        assert_eq!(entry.rating, 3);
        assert_eq!(entry.viewed_at, first);
        assert_eq!(ledger.entries().len(), 1);
    }

    #[test]
    fn test_new_entry_uses_call_time() {
        let (mut ledger, _) = ledger();
        let before = Utc::now();
        ledger.upsert_rating(&joke("t"), 2).unwrap();
        let after = Utc::now();

        let viewed_at = ledger.get("t").unwrap().viewed_at;
        assert!(viewed_at >= before && viewed_at <= after);
    }

    #[test]
    fn test_zero_rating_on_untracked_joke_is_noop() {
        let (mut ledger, backend) = ledger();
        assert_eq!(
            ledger.upsert_rating(&joke("z"), 0).unwrap(),
            RatingChange::Unchanged
        );
        assert!(ledger.entries().is_empty());
        assert!(ledger.list_favorites(&FavoritesFilter::new()).is_empty());
        assert_eq!(backend.raw(RATED_JOKES_KEY), None);
    }

    #[test]
    fn test_unrating_keeps_slot_but_hides_favorite() {
        let (mut ledger, _) = ledger();
        ledger.upsert_rating(&joke("u"), 4).unwrap();
        ledger.upsert_rating(&joke("u"), 0).unwrap();

        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.rating_of("u"), 0);
        assert!(ledger.list_favorites(&FavoritesFilter::new()).is_empty());
    }

    #[test]
    fn test_rating_above_max_is_rejected() {
        let (mut ledger, _) = ledger();
        let err = ledger.upsert_rating(&joke("x"), 6).unwrap_err();
        assert!(matches!(err, JokeboxError::Validation(_)));
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_list_favorites_filters_and_sorts() {
        let (mut ledger, _) = ledger();
        let t0 = Utc::now() - Duration::days(3);
        ledger
            .upsert_rating_at(&joke("old").with_categories(["dev"]), 5, t0)
            .unwrap();
        ledger
            .upsert_rating_at(&joke("mid"), 3, t0 + Duration::days(1))
            .unwrap();
        ledger
            .upsert_rating_at(
                &joke("new").with_categories(["dev", "food"]),
                5,
                t0 + Duration::days(2),
            )
            .unwrap();

        let all = ledger.list_favorites(&FavoritesFilter::new());
        assert_eq!(ids(&all), vec!["new", "mid", "old"]);

        let fives = ledger.list_favorites(&FavoritesFilter::new().rating(RatingSelector::Exactly(5)));
        assert_eq!(ids(&fives), vec!["new", "old"]);

        let dev = ledger.list_favorites(
            &FavoritesFilter::new().category(CategorySelector::Label("dev".into())),
        );
        assert_eq!(ids(&dev), vec!["new", "old"]);

        let none = ledger.list_favorites(&FavoritesFilter::new().category(CategorySelector::None));
        assert_eq!(ids(&none), vec!["mid"]);

        let food_threes = ledger.list_favorites(
            &FavoritesFilter::new()
                .rating(RatingSelector::Exactly(3))
                .category(CategorySelector::Label("food".into())),
        );
        assert!(food_threes.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (mut ledger, backend) = ledger();
        ledger.upsert_rating(&joke("a"), 1).unwrap();
        ledger.upsert_rating(&joke("b"), 2).unwrap();

        assert!(ledger.remove("a"));
        assert!(!ledger.remove("a"));
        assert_eq!(ledger.rating_of("a"), 0);

        ledger.clear();
        assert!(ledger.entries().is_empty());
        assert_eq!(backend.raw(RATED_JOKES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backend = MemoryBackend::new();
        let mut first = RatedLedger::open(JsonStore::new(backend.clone()));
        let mut second = RatedLedger::open(JsonStore::new(backend));

        first.upsert_rating(&joke("shared"), 4).unwrap();
        assert_eq!(second.rating_of("shared"), 0);

        second.reload();
        assert_eq!(second.rating_of("shared"), 4);
    }

    #[test]
    fn test_corrupt_document_hydrates_empty() {
        let backend = MemoryBackend::new();
        backend.set(RATED_JOKES_KEY, "[{\"id\": 1").unwrap();
        let ledger = RatedLedger::open(JsonStore::new(backend));
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_in_memory_state() {
        let backend = MemoryBackend::with_quota(10);
        let mut ledger = RatedLedger::open(JsonStore::new(backend.clone()));

        ledger.upsert_rating(&joke("big"), 5).unwrap();
        assert_eq!(ledger.rating_of("big"), 5);
        assert_eq!(backend.raw(RATED_JOKES_KEY), None);
    }

    #[test]
    fn test_stats() {
        let (mut ledger, _) = ledger();
        ledger
            .upsert_rating(&joke("a").with_categories(["dev"]), 5)
            .unwrap();
        ledger.upsert_rating(&joke("b"), 5).unwrap();
        ledger
            .upsert_rating(&joke("c").with_categories(["dev", "food"]), 2)
            .unwrap();
        ledger.upsert_rating(&joke("d"), 1).unwrap();
        ledger.upsert_rating(&joke("d"), 0).unwrap();

        let stats = ledger.stats();
        assert_eq!(stats.total_favorites, 3);
        assert_eq!(stats.rating_counts, [0, 1, 0, 0, 2]);
        assert_eq!(stats.categories.category_counts.get("dev"), Some(&2));
        assert_eq!(stats.categories.uncategorized_count, 1);
        assert_eq!(stats.categories.sorted_unique_labels, vec!["dev", "food"]);
    }
}
