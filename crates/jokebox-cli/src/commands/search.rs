use jokebox_core::model::{searchable_term, MIN_TERM_LEN};
use jokebox_core::{compute_stats, filter_by_category, CategorySelector, RequestGuard};

use crate::app::{exit_with_hint, AppContext};
use crate::cli::SearchArgs;
use crate::constants::exit_codes;
use crate::output::{jokes_json, print_category_stats, print_joke_list, print_json};
use crate::ui::{badge, blank_line, header, hint, kv, Badge, Spinner};

use super::{cancelled, run_guarded};

pub async fn handle_search(ctx: &AppContext<'_>, args: &SearchArgs) -> anyhow::Result<()> {
    let category: CategorySelector = args.category.parse()?;
    let Some(term) = searchable_term(&args.term) else {
        exit_with_hint(
            exit_codes::INVALID_INPUT,
            &format!("Search term must be at least {} characters", MIN_TERM_LEN),
            "Try a longer term, e.g. `jokebox search kick`.",
        )
    };

    if !args.no_history {
        ctx.history_ledger()?.record(term);
    }

    let ui = ctx.ui_context();
    let client = ctx.client()?;
    let guard = RequestGuard::new();

    let spinner = Spinner::new(&ui, &format!("Searching for {:?}", term));
    spinner.start();
    let fetched = run_guarded(&guard, client.search(term)).await;
    spinner.clear();
    let response = fetched?.ok_or_else(cancelled)?;

    let mut recent = ctx.recent_jokes()?;
    recent.remember(&response.result);
    let rated = ctx.rated_ledger()?;

    let shown = filter_by_category(&response.result, &category);
    let rows: Vec<_> = shown
        .iter()
        .map(|joke| (*joke, rated.rating_of(&joke.id)))
        .collect();
    let stats = compute_stats(&response.result);

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "term": term,
            "total": response.total,
            "category": category.to_string(),
            "categories": stats,
            "results": jokes_json(rows),
        }));
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "search", Some(term)));
        blank_line(&ui);
    }
    if rows.is_empty() {
        if !ctx.quiet() {
            println!("{}", badge(&ui, Badge::Warn, "No jokes found."));
            if response.total > 0 {
                println!("{}", hint(&ui, "Try `--category all`."));
            }
        }
        return Ok(());
    }

    print_joke_list(&ui, &rows, Some(term));
    if !ctx.quiet() {
        blank_line(&ui);
        println!(
            "{}",
            kv(&ui, "Shown", &format!("{} of {}", rows.len(), response.total))
        );
        if ui.mode.is_pretty() {
            print_category_stats(&ui, &stats);
        }
    }
    Ok(())
}
