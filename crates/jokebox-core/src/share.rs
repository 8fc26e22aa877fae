//! Share payloads for a joke.
//!
//! Building the payload is pure; delivering it (clipboard, browser) is left
//! to the front end, which falls back to the clipboard when a channel is
//! unavailable.

use std::fmt;
use std::str::FromStr;

use crate::error::{JokeboxError, Result};
use crate::model::Joke;

pub const SHARE_TITLE: &str = "Chuck Norris Joke";

const WHATSAPP_BASE: &str = "https://wa.me/?text=";

/// Where a joke is being shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareTarget {
    /// Copy the text to the clipboard
    #[default]
    Clipboard,
    /// A wa.me link with the text prefilled
    WhatsApp,
    /// The joke's canonical URL
    Link,
}

impl FromStr for ShareTarget {
    type Err = JokeboxError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clipboard" | "copy" => Ok(Self::Clipboard),
            "whatsapp" => Ok(Self::WhatsApp),
            "link" | "url" => Ok(Self::Link),
            other => Err(JokeboxError::InvalidInput(format!(
                "unknown share target: {} (use clipboard, whatsapp or link)",
                other
            ))),
        }
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clipboard => "clipboard",
            Self::WhatsApp => "whatsapp",
            Self::Link => "link",
        };
        write!(f, "{}", name)
    }
}

/// Plain text copied or shared for `joke`.
pub fn share_text(joke: &Joke) -> String {
    joke.value.clone()
}

/// A wa.me link that opens a chat with the joke prefilled.
pub fn whatsapp_url(joke: &Joke) -> String {
    format!("{}{}", WHATSAPP_BASE, urlencoding::encode(&joke.value))
}

/// The joke's canonical link.
///
/// # Errors
///
/// Returns `JokeboxError::ShareUnavailable` when the record carries no URL.
pub fn share_link(joke: &Joke) -> Result<String> {
    match joke.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(JokeboxError::ShareUnavailable(format!(
            "joke {} has no link",
            joke.id
        ))),
    }
}
