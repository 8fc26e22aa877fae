use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use jokebox_core::VERSION;

/// Jokebox - search, rate, favorite and share Chuck Norris jokes
#[derive(Parser)]
#[command(name = "jokebox")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding favorites and search history
    #[arg(short, long, global = true, env = "JOKEBOX_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only symbols
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `random` command
#[derive(Args)]
pub struct RandomArgs {
    /// Only pick from this category
    #[arg(long)]
    pub category: Option<String>,

    /// Rate the joke right away (1-5)
    #[arg(long, value_name = "RATING")]
    pub rate: Option<i32>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (at least 3 characters)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Filter results by category (all, none, or a label)
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Do not record the term in search history
    #[arg(long)]
    pub no_history: bool,
}

/// Arguments for the `rate` command
#[derive(Args)]
pub struct RateArgs {
    /// Joke ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Rating 1-5, or 0 to unrate
    #[arg(value_name = "RATING", allow_negative_numbers = true)]
    pub rating: i32,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Joke ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `favorites` command
#[derive(Args)]
pub struct FavoritesArgs {
    /// Filter by rating (all, 1-5)
    #[arg(long, default_value = "all")]
    pub rating: String,

    /// Filter by category (all, none, or a label)
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for commands that wipe a ledger
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommands>,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Forget all past searches
    Clear(ClearArgs),
}

/// Arguments for the `share` command
#[derive(Args)]
pub struct ShareArgs {
    /// Joke ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Where to share (clipboard, whatsapp, link)
    #[arg(long, default_value = "clipboard")]
    pub target: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a random joke
    Random(RandomArgs),

    /// Search the joke catalog
    Search(SearchArgs),

    /// Rate a joke you have seen (0 removes the rating)
    Rate(RateArgs),

    /// Remove a joke from favorites
    Remove(RemoveArgs),

    /// List favorite jokes
    Favorites(FavoritesArgs),

    /// Show favorites statistics
    Stats,

    /// Remove all favorites
    ClearFavorites(ClearArgs),

    /// Show (or clear) search history
    History(HistoryArgs),

    /// List the catalog's categories
    Categories,

    /// Share a joke
    Share(ShareArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
