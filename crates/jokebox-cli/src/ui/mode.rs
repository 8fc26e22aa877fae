//! Picking an output mode from flags and the terminal.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document, nothing else on stdout
    Json,
    /// Line-oriented text for pipes and scripts
    #[default]
    Plain,
    /// Cards, tables and colors for a terminal
    Pretty,
}

/// What we know about stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub dumb: bool,
}

impl Terminal {
    pub fn probe() -> Self {
        use std::io::IsTerminal;

        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
        }
    }

    fn is_rich(&self) -> bool {
        self.stdout_tty && !self.dumb
    }
}

impl OutputMode {
    /// `--json` (or `--format json`) wins, then `--format plain`; otherwise
    /// a capable terminal gets pretty output and everything else plain.
    pub fn resolve(json_flag: bool, format_flag: Option<&str>, terminal: Terminal) -> Self {
        let format = format_flag.map(|f| f.trim().to_ascii_lowercase());
        match format.as_deref() {
            _ if json_flag => Self::Json,
            Some("json") => Self::Json,
            Some("plain") => Self::Plain,
            _ if terminal.is_rich() => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}
