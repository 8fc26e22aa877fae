use jokebox_core::{
    CategorySelector, FavoritesFilter, JokeboxError, RatingChange, RatingSelector,
};

use crate::app::AppContext;
use crate::cli::{ClearArgs, FavoritesArgs, RateArgs, RemoveArgs};
use crate::output::{joke_json, print_favorites, print_favorites_stats, print_json};
use crate::ui::{badge, blank_line, header, hint, Badge};

use super::find_known_joke;

pub fn handle_rate(ctx: &AppContext, args: &RateArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let mut rated = ctx.rated_ledger()?;
    let recent = ctx.recent_jokes()?;
    let joke = find_known_joke(&rated, &recent, &args.id)?;

    let change = rated.upsert_rating(&joke, args.rating)?;
    let rating = rated.rating_of(&joke.id);

    if ui.mode.is_json() {
        let mut value = joke_json(&joke, rating);
        value["change"] = serde_json::Value::String(change_label(change).to_string());
        return print_json(&value);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let message = match change {
        RatingChange::Inserted => format!("Added {} to favorites ({}/5)", joke.id, rating),
        RatingChange::Updated { previous } if rating <= 0 => {
            format!("Unrated {} (was {}/5)", joke.id, previous)
        }
        RatingChange::Updated { previous } => {
            format!("Rated {} {}/5 (was {}/5)", joke.id, rating, previous)
        }
        RatingChange::Unchanged => format!("{} unchanged ({}/5)", joke.id, rating),
    };
    println!("{}", badge(&ui, Badge::Ok, &message));
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let mut rated = ctx.rated_ledger()?;
    if !rated.remove(&args.id) {
        return Err(JokeboxError::NotFound(format!("{} is not in favorites", args.id)).into());
    }

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({ "id": args.id, "removed": true }));
    }
    if !ctx.quiet() {
        println!(
            "{}",
            badge(&ui, Badge::Ok, &format!("Removed {} from favorites", args.id))
        );
    }
    Ok(())
}

pub fn handle_favorites(ctx: &AppContext, args: &FavoritesArgs) -> anyhow::Result<()> {
    let rating: RatingSelector = args.rating.parse()?;
    let category: CategorySelector = args.category.parse()?;
    let filter = FavoritesFilter::new().rating(rating).category(category);

    let ui = ctx.ui_context();
    let rated = ctx.rated_ledger()?;
    let favorites = rated.list_favorites(&filter);

    if ui.mode.is_json() {
        return print_json(&favorites);
    }

    if !ctx.quiet() {
        let context = format!("rating: {}, category: {}", filter.rating, filter.category);
        println!("{}", header(&ui, "favorites", Some(&context)));
        blank_line(&ui);
    }
    if favorites.is_empty() {
        if !ctx.quiet() {
            println!("No favorites yet.");
            println!(
                "{}",
                hint(&ui, "Rate a joke with `jokebox rate <ID> <1-5>`.")
            );
        }
        return Ok(());
    }
    print_favorites(&ui, &favorites);
    Ok(())
}

pub fn handle_stats(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let stats = ctx.rated_ledger()?.stats();

    if ui.mode.is_json() {
        return print_json(&stats);
    }
    if !ctx.quiet() {
        println!("{}", header(&ui, "stats", None));
        blank_line(&ui);
    }
    print_favorites_stats(&ui, &stats);
    Ok(())
}

pub fn handle_clear_favorites(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    if !confirm_clear(&ui, args, "Remove all favorites?")? {
        return Err(anyhow::anyhow!("Clear cancelled"));
    }

    let mut rated = ctx.rated_ledger()?;
    rated.clear();

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({ "cleared": "favorites" }));
    }
    if !ctx.quiet() {
        println!("{}", badge(&ui, Badge::Ok, "Cleared all favorites"));
    }
    Ok(())
}

/// Ask before wiping a ledger. Non-interactive runs must pass `--yes`.
pub(super) fn confirm_clear(
    ui: &crate::ui::UiContext,
    args: &ClearArgs,
    prompt: &str,
) -> anyhow::Result<bool> {
    if args.yes {
        return Ok(true);
    }
    if !ui.is_interactive() {
        return Err(JokeboxError::InvalidInput(
            "refusing to clear without confirmation; pass --yes".to_string(),
        )
        .into());
    }
    Ok(dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn change_label(change: RatingChange) -> &'static str {
    match change {
        RatingChange::Inserted => "inserted",
        RatingChange::Updated { .. } => "updated",
        RatingChange::Unchanged => "unchanged",
    }
}
