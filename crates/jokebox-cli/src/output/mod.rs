//! Output formatting helpers for the CLI.
//!
//! Jokes, favorites, history and statistics are rendered either as JSON
//! documents or as text whose shape follows the UI output mode.

mod json;
mod text;

pub use json::{joke_json, jokes_json, print_json};
pub use text::{
    print_category_stats, print_favorites, print_favorites_stats, print_history, print_joke,
    print_joke_list,
};
