use jokebox_core::model::MIN_RATING;
use jokebox_core::{JokeboxError, RequestGuard};

use crate::app::AppContext;
use crate::cli::RandomArgs;
use crate::output::{joke_json, print_joke, print_json};
use crate::ui::{blank_line, header, Spinner};

use super::{cancelled, run_guarded};

pub async fn handle_random(ctx: &AppContext<'_>, args: &RandomArgs) -> anyhow::Result<()> {
    if let Some(rating) = args.rate {
        if rating < MIN_RATING {
            return Err(JokeboxError::InvalidInput(format!(
                "--rate must be between 1 and 5: {}",
                rating
            ))
            .into());
        }
    }

    let ui = ctx.ui_context();
    let client = ctx.client()?;
    let guard = RequestGuard::new();

    let spinner = Spinner::new(&ui, "Fetching a joke");
    spinner.start();
    let fetched = match args.category.as_deref() {
        Some(category) => run_guarded(&guard, client.fetch_random_in(category)).await,
        None => run_guarded(&guard, client.fetch_random()).await,
    };
    spinner.clear();
    let joke = fetched?.ok_or_else(cancelled)?;

    let mut recent = ctx.recent_jokes()?;
    recent.remember(std::slice::from_ref(&joke));

    let mut rated = ctx.rated_ledger()?;
    if let Some(rating) = args.rate {
        rated.upsert_rating(&joke, rating)?;
    }
    let rating = rated.rating_of(&joke.id);

    if ui.mode.is_json() {
        return print_json(&joke_json(&joke, rating));
    }
    if !ctx.quiet() {
        println!("{}", header(&ui, "random", args.category.as_deref()));
        blank_line(&ui);
    }
    print_joke(&ui, &joke, rating, None);
    Ok(())
}
