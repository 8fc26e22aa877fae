//! Read-only client for the remote joke catalog.
//!
//! Endpoints (relative to the base URL):
//!
//! - `GET /random` - one joke
//! - `GET /random?category=<c>` - one joke from a category
//! - `GET /categories` - category labels
//! - `GET /search?query=<term>` - `{ total, result }`
//!
//! No retries: a failed request surfaces as `JokeboxError::Network` and the
//! caller decides how to report it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{JokeboxError, Result};
use crate::model::{searchable_term, Joke, SearchResponse};

/// Public catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io/jokes";

#[derive(Debug, Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl JokeClient {
    /// Client with reqwest's default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Client with an overall per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `JokeboxError::Network` if the HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one random joke.
    pub async fn fetch_random(&self) -> Result<Joke> {
        let url = format!("{}/random", self.base_url);
        let joke: Joke = self.get_json(&url).await?;
        joke.validate()?;
        Ok(joke)
    }

    /// Fetch one random joke from `category`.
    pub async fn fetch_random_in(&self, category: &str) -> Result<Joke> {
        let url = format!(
            "{}/random?category={}",
            self.base_url,
            urlencoding::encode(category)
        );
        let joke: Joke = self.get_json(&url).await?;
        joke.validate()?;
        Ok(joke)
    }

    /// List the catalog's category labels.
    pub async fn fetch_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/categories", self.base_url);
        self.get_json(&url).await
    }

    /// Search the catalog.
    ///
    /// Terms shorter than three characters return an empty response without
    /// a request; the catalog rejects them anyway. A 404 means no matches.
    pub async fn search(&self, term: &str) -> Result<SearchResponse> {
        let Some(term) = searchable_term(term) else {
            tracing::debug!(term, "search term too short, skipping request");
            return Ok(SearchResponse::empty());
        };

        let url = format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(term)
        );
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(SearchResponse::empty());
        }
        if !status.is_success() {
            return Err(JokeboxError::Network(format!(
                "search for {:?} failed: HTTP {}",
                term, status
            )));
        }

        let body: SearchResponse = decode_body(response).await?;
        for joke in &body.result {
            joke.validate()?;
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(JokeboxError::Network(format!(
                "request to {} failed: HTTP {}",
                url, status
            )));
        }
        decode_body(response).await
    }
}

/// Read a JSON body. A body that is not JSON at all is a `Network` error;
/// JSON that does not fit `T` is a `Validation` error.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let text = response.text().await?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|err| JokeboxError::Network(format!("response is not JSON: {}", err)))?;
    serde_json::from_value(value)
        .map_err(|err| JokeboxError::Validation(format!("malformed joke record: {}", err)))
}

/// Identifies one in-flight request issued through a [`RequestGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Discards results that arrive after their requester moved on.
///
/// Each [`begin`](Self::begin) supersedes earlier tokens; [`cancel`](Self::cancel)
/// invalidates the current one. A result is only applied if
/// [`accept`](Self::accept) still recognises its token.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Hand back `value` only if `token` is still current.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            tracing::debug!(token = token.0, "discarding stale result");
            None
        }
    }
}
