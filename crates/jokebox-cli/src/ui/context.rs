//! Everything the renderers need to know about where output is going.

use std::io::IsTerminal;

use super::mode::{OutputMode, Terminal};

const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    /// Stars and badge symbols instead of ASCII stand-ins
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build from the global output flags.
    ///
    /// Color needs a non-dumb terminal, no `--no-color` and no `NO_COLOR`.
    /// Width comes from `COLUMNS` when set.
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool, ascii: bool) -> Self {
        let terminal = Terminal::probe();
        let color = terminal.stdout_tty
            && !terminal.dumb
            && !no_color
            && std::env::var_os("NO_COLOR").is_none();
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|cols| cols.trim().parse::<usize>().ok())
            .filter(|cols| *cols > 0)
            .unwrap_or(FALLBACK_WIDTH);

        Self {
            is_tty: terminal.stdout_tty,
            color,
            unicode: !ascii,
            width,
            mode: OutputMode::resolve(json, format, terminal),
        }
    }

    /// Prompts need a terminal on both ends.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }

    pub fn allows_animation(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}
