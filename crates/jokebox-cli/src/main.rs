//! Jokebox CLI - search, rate, favorite and share Chuck Norris jokes
//!
//! This is the command-line interface for Jokebox. Favorites, search history
//! and recently shown jokes live in a local data directory; jokes come from
//! the public catalog.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::{exit_code_for, hint_for, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_categories, handle_clear_favorites, handle_completions, handle_favorites,
    handle_history, handle_random, handle_rate, handle_remove, handle_search, handle_share,
    handle_stats,
};
use crate::ui::{badge, hint, Badge, UiContext};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli).await {
        tracing::debug!(error = ?err, "command failed");
        let ui = UiContext::from_env(cli.json, cli.format.as_deref(), cli.no_color, cli.ascii);
        eprintln!("{}", badge(&ui, Badge::Err, &format!("Error: {:#}", err)));
        if let Some(text) = hint_for(&err) {
            eprintln!("{}", hint(&ui, text));
        }
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Random(args)) => handle_random(&ctx, args).await,
        Some(Commands::Search(args)) => handle_search(&ctx, args).await,
        Some(Commands::Rate(args)) => handle_rate(&ctx, args),
        Some(Commands::Remove(args)) => handle_remove(&ctx, args),
        Some(Commands::Favorites(args)) => handle_favorites(&ctx, args),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::ClearFavorites(args)) => handle_clear_favorites(&ctx, args),
        Some(Commands::History(args)) => handle_history(&ctx, args),
        Some(Commands::Categories) => handle_categories(&ctx).await,
        Some(Commands::Share(args)) => handle_share(&ctx, args),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
