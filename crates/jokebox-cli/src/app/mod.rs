//! Application-level utilities for the Jokebox CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - API endpoint resolution
//! - A context object bundling CLI flags with lazily-loaded config
//! - Exit code mapping for command failures

mod context;
mod exit;
mod resolver;

pub use context::AppContext;
pub use exit::{exit_code_for, exit_with_hint, hint_for};
