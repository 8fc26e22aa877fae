//! Category statistics and selectors.
//!
//! Everything here is pure: functions take a slice of records and return
//! derived views without touching storage.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::JokeboxError;
use crate::model::{Joke, RatedJoke, MAX_RATING, MIN_RATING};

/// Records that carry category labels.
pub trait Categorized {
    fn categories(&self) -> &[String];

    fn is_uncategorized(&self) -> bool {
        self.categories().is_empty()
    }
}

impl Categorized for Joke {
    fn categories(&self) -> &[String] {
        self.category_labels()
    }
}

impl Categorized for RatedJoke {
    fn categories(&self) -> &[String] {
        self.joke.category_labels()
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn categories(&self) -> &[String] {
        (**self).categories()
    }
}

/// Category filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    /// No filtering
    #[default]
    All,
    /// Only records without categories
    None,
    /// Records tagged with this exact label
    Label(String),
}

impl CategorySelector {
    pub fn matches<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::None => item.is_uncategorized(),
            Self::Label(label) => item.categories().iter().any(|c| c == label),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = JokeboxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(JokeboxError::InvalidInput(
                "category filter cannot be empty".to_string(),
            )),
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            label => Ok(Self::Label(label.to_string())),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::None => write!(f, "none"),
            Self::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Rating filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingSelector {
    /// Any favorite (rating > 0)
    #[default]
    All,
    /// Exactly this rating
    Exactly(i32),
}

impl RatingSelector {
    pub fn matches(&self, rating: i32) -> bool {
        match self {
            Self::All => rating > 0,
            Self::Exactly(wanted) => rating == *wanted,
        }
    }
}

impl FromStr for RatingSelector {
    type Err = JokeboxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == "all" {
            return Ok(Self::All);
        }
        let rating: i32 = value.parse().map_err(|_| {
            JokeboxError::InvalidInput(format!(
                "rating filter must be \"all\" or {}-{}: {}",
                MIN_RATING, MAX_RATING, value
            ))
        })?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(JokeboxError::InvalidInput(format!(
                "rating filter out of range ({}-{}): {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }
        Ok(Self::Exactly(rating))
    }
}

impl fmt::Display for RatingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Exactly(rating) => write!(f, "{}", rating),
        }
    }
}

/// Category distribution over a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    /// Occurrences per label; a joke with N labels lands in N buckets
    pub category_counts: BTreeMap<String, usize>,
    pub uncategorized_count: usize,
    /// Ascending, case-sensitive
    pub sorted_unique_labels: Vec<String>,
}

pub fn compute_stats<T: Categorized>(items: &[T]) -> CategoryStats {
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut uncategorized_count = 0;

    for item in items {
        if item.is_uncategorized() {
            uncategorized_count += 1;
            continue;
        }
        for label in item.categories() {
            *category_counts.entry(label.clone()).or_insert(0) += 1;
        }
    }

    // BTreeMap keys iterate in byte order, which is the case-sensitive sort.
    let sorted_unique_labels = category_counts.keys().cloned().collect();

    CategoryStats {
        total: items.len(),
        category_counts,
        uncategorized_count,
        sorted_unique_labels,
    }
}

/// Keep the items matching `selector`, preserving input order.
pub fn filter_by_category<'a, T: Categorized>(
    items: &'a [T],
    selector: &CategorySelector,
) -> Vec<&'a T> {
    items.iter().filter(|item| selector.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Joke> {
        vec![
            Joke::new("1", "one").with_categories(["dev"]),
            Joke::new("2", "two"),
            Joke::new("3", "three").with_categories(["dev", "food"]),
            Joke::new("4", "four").with_categories(Vec::<String>::new()),
            Joke::new("5", "five").with_categories(["Animal"]),
        ]
    }

    fn ids(items: &[&Joke]) -> Vec<String> {
        items.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&sample());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.category_counts.get("dev"), Some(&2));
        assert_eq!(stats.category_counts.get("food"), Some(&1));
        assert_eq!(stats.uncategorized_count, 2);
        assert_eq!(stats.sorted_unique_labels, vec!["Animal", "dev", "food"]);
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats::<Joke>(&[]);
        assert_eq!(stats, CategoryStats::default());
    }

    #[test]
    fn test_filter_all_returns_input_in_order() {
        let jokes = sample();
        let filtered = filter_by_category(&jokes, &CategorySelector::All);
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_none_returns_uncategorized() {
        let jokes = sample();
        let filtered = filter_by_category(&jokes, &CategorySelector::None);
        assert_eq!(ids(&filtered), vec!["2", "4"]);
    }

    #[test]
    fn test_filter_label_is_exact_membership() {
        let jokes = sample();
        let dev = filter_by_category(&jokes, &CategorySelector::Label("dev".into()));
        assert_eq!(ids(&dev), vec!["1", "3"]);

        let animal = filter_by_category(&jokes, &CategorySelector::Label("animal".into()));
        assert!(animal.is_empty());
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!("all".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!("none".parse::<CategorySelector>().unwrap(), CategorySelector::None);
        assert_eq!(
            "dev".parse::<CategorySelector>().unwrap(),
            CategorySelector::Label("dev".into())
        );
        assert!("".parse::<CategorySelector>().is_err());

        assert_eq!("all".parse::<RatingSelector>().unwrap(), RatingSelector::All);
        assert_eq!("3".parse::<RatingSelector>().unwrap(), RatingSelector::Exactly(3));
        assert!("0".parse::<RatingSelector>().is_err());
        assert!("6".parse::<RatingSelector>().is_err());
        assert!("many".parse::<RatingSelector>().is_err());
    }

    #[test]
    fn test_rating_selector_all_excludes_unrated() {
        assert!(RatingSelector::All.matches(1));
        assert!(!RatingSelector::All.matches(0));
        assert!(!RatingSelector::All.matches(-1));
        assert!(RatingSelector::Exactly(4).matches(4));
        assert!(!RatingSelector::Exactly(4).matches(5));
    }
}
