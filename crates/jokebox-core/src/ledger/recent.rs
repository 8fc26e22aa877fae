//! Recently displayed jokes, so a joke can be rated after it was shown.

use crate::model::Joke;
use crate::storage::{JsonStore, KeyValueBackend, RECENT_JOKES_KEY};

pub const RECENT_CAP: usize = 50;

#[derive(Debug)]
pub struct RecentJokes<B> {
    store: JsonStore<B>,
    jokes: Vec<Joke>,
}

impl<B: KeyValueBackend> RecentJokes<B> {
    pub fn open(store: JsonStore<B>) -> Self {
        let mut jokes: Vec<Joke> = store.read(RECENT_JOKES_KEY, Vec::new());
        jokes.truncate(RECENT_CAP);
        Self { store, jokes }
    }

    /// Remember `shown`, newest first, deduplicated by id.
    pub fn remember(&mut self, shown: &[Joke]) {
        if shown.is_empty() {
            return;
        }
        for joke in shown.iter().rev() {
            self.jokes.retain(|existing| existing.id != joke.id);
            self.jokes.insert(0, joke.clone());
        }
        self.jokes.truncate(RECENT_CAP);
        self.store.write(RECENT_JOKES_KEY, &self.jokes);
    }

    pub fn find(&self, id: &str) -> Option<&Joke> {
        self.jokes.iter().find(|joke| joke.id == id)
    }

    pub fn list(&self) -> &[Joke] {
        &self.jokes
    }
}
