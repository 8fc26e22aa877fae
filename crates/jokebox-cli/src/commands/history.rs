use crate::app::AppContext;
use crate::cli::{HistoryArgs, HistoryCommands};
use crate::output::{print_history, print_json};
use crate::ui::{badge, blank_line, header, hint, Badge};

use super::favorites::confirm_clear;

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let mut history = ctx.history_ledger()?;

    if let Some(HistoryCommands::Clear(clear)) = &args.command {
        if !confirm_clear(&ui, clear, "Forget all past searches?")? {
            return Err(anyhow::anyhow!("Clear cancelled"));
        }
        history.clear();
        if ui.mode.is_json() {
            return print_json(&serde_json::json!({ "cleared": "history" }));
        }
        if !ctx.quiet() {
            println!("{}", badge(&ui, Badge::Ok, "Cleared search history"));
        }
        return Ok(());
    }

    if ui.mode.is_json() {
        return print_json(history.list());
    }
    if !ctx.quiet() {
        println!("{}", header(&ui, "history", None));
        blank_line(&ui);
    }
    if history.is_empty() {
        if !ctx.quiet() {
            println!("No searches yet.");
            println!("{}", hint(&ui, "Run `jokebox search <TERM>`."));
        }
        return Ok(());
    }
    print_history(&ui, history.list());
    Ok(())
}
