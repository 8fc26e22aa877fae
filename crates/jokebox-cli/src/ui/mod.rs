//! Terminal output for the Jokebox CLI.
//!
//! `context` and `mode` decide how to write (JSON, plain lines, or pretty
//! cards and tables); `render`, `format`, `theme` and `progress` do the
//! writing.

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use format::{format_datetime, stars, truncate, wrap};
pub use mode::OutputMode;
pub use progress::Spinner;
pub use render::{badge, blank_line, header, hint, kv, print, simple_table};
pub use theme::Badge;
