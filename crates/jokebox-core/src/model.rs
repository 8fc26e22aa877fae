//! Core data types.
//!
//! `Joke` mirrors the record returned by the remote catalog. `RatedJoke` and
//! `HistoryEntry` are the records persisted by the ledgers; their JSON layout
//! is stable across releases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JokeboxError, Result};

/// Lowest rating that marks a joke as a favorite.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Minimum length (in characters) of a searchable term.
pub const MIN_TERM_LEN: usize = 3;

/// A joke record from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Stable identity of the source record
    pub id: String,

    /// Display text
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Canonical link to the joke on the catalog's site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Category labels, in source order. May be absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Joke {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            icon_url: None,
            url: None,
            created_at: None,
            updated_at: None,
            categories: None,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Category labels, treating an absent list as empty.
    pub fn category_labels(&self) -> &[String] {
        self.categories.as_deref().unwrap_or(&[])
    }

    /// Check the record received from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `JokeboxError::Validation` if the id or text is blank.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(JokeboxError::Validation("joke record has an empty id".to_string()));
        }
        if self.value.trim().is_empty() {
            return Err(JokeboxError::Validation(format!(
                "joke {} has empty text",
                self.id
            )));
        }
        Ok(())
    }
}

/// A joke tracked by the rated-jokes ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedJoke {
    #[serde(flatten)]
    pub joke: Joke,

    /// 1-5 for favorites; 0 or below means "not rated"
    pub rating: i32,

    /// When the joke was first favorited. Re-rating does not move it.
    #[serde(rename = "viewedAt")]
    pub viewed_at: DateTime<Utc>,
}

impl RatedJoke {
    pub fn new(joke: Joke, rating: i32, viewed_at: DateTime<Utc>) -> Self {
        Self {
            joke,
            rating,
            viewed_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.joke.id
    }

    pub fn is_favorite(&self) -> bool {
        self.rating > 0
    }

    /// Rated above 4 stars.
    pub fn is_top(&self) -> bool {
        self.rating > 4
    }
}

/// A past search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub term: String,

    /// Most recent search with this exact term
    pub timestamp: DateTime<Utc>,
}

/// Response body of the catalog's search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub result: Vec<Joke>,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Check a search term. Returns the trimmed term when it is long enough.
pub fn searchable_term(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    if trimmed.chars().count() < MIN_TERM_LEN {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_accepts_catalog_payload() {
        let payload = serde_json::json!({
            "categories": ["dev"],
            "created_at": "2020-01-05 13:42:19.324003",
            "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
            "id": "abc123",
            "updated_at": "2020-01-05 13:42:19.324003",
            "url": "https://api.chucknorris.io/jokes/abc123",
            "value": "Chuck Norris writes code that optimizes itself."
        });

        let joke: Joke = serde_json::from_value(payload).unwrap();
        assert_eq!(joke.id, "abc123");
        assert_eq!(joke.category_labels(), &["dev".to_string()]);
        assert!(joke.validate().is_ok());
    }

    #[test]
    fn test_joke_without_categories() {
        let joke: Joke = serde_json::from_str(r#"{"id":"x1","value":"text"}"#).unwrap();
        assert!(joke.categories.is_none());
        assert!(joke.category_labels().is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_records() {
        assert!(matches!(
            Joke::new("", "text").validate(),
            Err(JokeboxError::Validation(_))
        ));
        assert!(matches!(
            Joke::new("id", "  ").validate(),
            Err(JokeboxError::Validation(_))
        ));
    }

    #[test]
    fn test_rated_joke_uses_flat_layout() {
        let viewed_at = "2024-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let rated = RatedJoke::new(Joke::new("a1", "text"), 4, viewed_at);

        let value = serde_json::to_value(&rated).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["rating"], 4);
        assert_eq!(value["viewedAt"], "2024-03-01T10:00:00Z");

        let back: RatedJoke = serde_json::from_value(value).unwrap();
        assert_eq!(back, rated);
    }

    #[test]
    fn test_searchable_term() {
        assert_eq!(searchable_term("  ab "), None);
        assert_eq!(searchable_term(" abc "), Some("abc"));
        assert_eq!(searchable_term(""), None);
    }
}
