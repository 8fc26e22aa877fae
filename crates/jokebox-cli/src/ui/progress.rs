//! Progress indicator for network requests, using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use std::time::Duration;

use super::context::UiContext;
use super::theme::spinner_frames;

/// A spinner for indeterminate progress. Silent outside pretty TTY output.
pub struct Spinner {
    bar: Option<IndicatifBar>,
}

impl Spinner {
    pub fn new(ctx: &UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let pb = IndicatifBar::new_spinner();
            let template = if ctx.unicode {
                "{spinner:.cyan} {msg}..."
            } else {
                "{spinner} {msg}..."
            };
            let style = ProgressStyle::default_spinner()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(spinner_frames(ctx.unicode));
            pb.set_style(style);
            pb.set_message(message.to_string());
            Some(pb)
        } else {
            None
        };

        Self { bar }
    }

    pub fn start(&self) {
        if let Some(bar) = &self.bar {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
    }

    /// Stop without printing anything.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
