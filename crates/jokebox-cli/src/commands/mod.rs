//! Command handlers, one module per command group.

mod categories;
mod favorites;
mod history;
mod misc;
mod random;
mod search;
mod share;

use std::future::Future;

use jokebox_core::{FileBackend, Joke, JokeboxError, RatedLedger, RecentJokes, RequestGuard};

pub use categories::handle_categories;
pub use favorites::{
    handle_clear_favorites, handle_favorites, handle_rate, handle_remove, handle_stats,
};
pub use history::handle_history;
pub use misc::handle_completions;
pub use random::handle_random;
pub use search::handle_search;
pub use share::handle_share;

/// Run `request` under `guard`, abandoning it on Ctrl-C.
///
/// Returns `Ok(None)` when the request was cancelled or superseded.
async fn run_guarded<T, F>(guard: &RequestGuard, request: F) -> anyhow::Result<Option<T>>
where
    F: Future<Output = jokebox_core::Result<T>>,
{
    let token = guard.begin();
    tokio::select! {
        result = request => Ok(guard.accept(token, result?)),
        _ = tokio::signal::ctrl_c() => {
            guard.cancel();
            tracing::info!("request cancelled");
            Ok(None)
        }
    }
}

/// Look a joke up among favorites, then among recently shown jokes.
fn find_known_joke(
    rated: &RatedLedger<FileBackend>,
    recent: &RecentJokes<FileBackend>,
    id: &str,
) -> anyhow::Result<Joke> {
    if let Some(entry) = rated.get(id) {
        return Ok(entry.joke.clone());
    }
    recent.find(id).cloned().ok_or_else(|| {
        JokeboxError::NotFound(format!("no recently shown joke with id {}", id)).into()
    })
}

fn cancelled() -> anyhow::Error {
    anyhow::anyhow!("Request cancelled")
}
