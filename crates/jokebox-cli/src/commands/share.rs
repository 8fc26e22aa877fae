use std::io::Write;
use std::process::{Command, Stdio};

use jokebox_core::share::{share_link, share_text, whatsapp_url, ShareTarget, SHARE_TITLE};
use jokebox_core::{Joke, JokeboxError};

use crate::app::AppContext;
use crate::cli::ShareArgs;
use crate::output::print_json;
use crate::ui::{badge, Badge, UiContext};

use super::find_known_joke;

/// Platform clipboard writers, tried in order.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("clip", &[]),
];

pub fn handle_share(ctx: &AppContext, args: &ShareArgs) -> anyhow::Result<()> {
    let target: ShareTarget = args.target.parse()?;
    let ui = ctx.ui_context();
    let rated = ctx.rated_ledger()?;
    let recent = ctx.recent_jokes()?;
    let joke = find_known_joke(&rated, &recent, &args.id)?;

    match target {
        ShareTarget::WhatsApp => emit_url(ctx, &ui, &joke, target, &whatsapp_url(&joke)),
        ShareTarget::Link => match share_link(&joke) {
            Ok(url) => emit_url(ctx, &ui, &joke, target, &url),
            Err(JokeboxError::ShareUnavailable(reason)) => {
                tracing::info!(%reason, "link unavailable, copying text instead");
                copy_joke(ctx, &ui, &joke)
            }
            Err(err) => Err(err.into()),
        },
        ShareTarget::Clipboard => copy_joke(ctx, &ui, &joke),
    }
}

fn emit_url(
    ctx: &AppContext,
    ui: &UiContext,
    joke: &Joke,
    target: ShareTarget,
    url: &str,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "id": joke.id,
            "title": SHARE_TITLE,
            "target": target.to_string(),
            "url": url,
        }));
    }
    if ctx.quiet() || !ui.mode.is_pretty() {
        println!("{}", url);
    } else {
        println!("{}", badge(ui, Badge::Info, &format!("Share \"{}\":", SHARE_TITLE)));
        println!("{}", url);
    }
    Ok(())
}

fn copy_joke(ctx: &AppContext, ui: &UiContext, joke: &Joke) -> anyhow::Result<()> {
    let text = share_text(joke);
    let program = copy_to_clipboard(&text)?;
    tracing::debug!(program, id = %joke.id, "copied joke");

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "id": joke.id,
            "target": ShareTarget::Clipboard.to_string(),
            "copied": true,
        }));
    }
    if !ctx.quiet() {
        println!("{}", badge(ui, Badge::Ok, "Joke copied to clipboard"));
    }
    Ok(())
}

/// Pipe `text` into the first clipboard command that accepts it.
fn copy_to_clipboard(text: &str) -> jokebox_core::Result<&'static str> {
    for &(program, args) in CLIPBOARD_COMMANDS {
        match pipe_into(program, args, text) {
            Ok(()) => return Ok(program),
            Err(err) => tracing::debug!(program, %err, "clipboard command failed"),
        }
    }
    Err(JokeboxError::ClipboardUnavailable(
        "no clipboard command succeeded".to_string(),
    ))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // Reap the child even when it stopped reading early.
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{} exited with {}", program, status)))
    }
}
