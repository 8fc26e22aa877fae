//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with command output.
//! `RUST_LOG` wins over the `-v` count.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "jokebox=warn,jokebox_core=warn,jokebox_cli=warn",
        1 => "jokebox=info,jokebox_core=info,jokebox_cli=info",
        _ => "jokebox=debug,jokebox_core=debug,jokebox_cli=debug",
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
