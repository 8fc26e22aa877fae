use jokebox_core::RequestGuard;

use crate::app::AppContext;
use crate::output::print_json;
use crate::ui::{blank_line, header, print, Spinner};

use super::{cancelled, run_guarded};

pub async fn handle_categories(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let client = ctx.client()?;
    let guard = RequestGuard::new();

    let spinner = Spinner::new(&ui, "Fetching categories");
    spinner.start();
    let fetched = run_guarded(&guard, client.fetch_categories()).await;
    spinner.clear();
    let categories = fetched?.ok_or_else(cancelled)?;

    if ui.mode.is_json() {
        return print_json(&categories);
    }
    if !ctx.quiet() {
        println!("{}", header(&ui, "categories", None));
        blank_line(&ui);
    }
    for category in &categories {
        print(&ui, category);
    }
    Ok(())
}
