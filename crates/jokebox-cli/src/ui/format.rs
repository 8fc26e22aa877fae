//! Text helpers shared by the renderers.

use chrono::{DateTime, Utc};

use jokebox_core::model::MAX_RATING;

/// Shorten `text` to at most `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    if max > 0 {
        out.push('\u{2026}');
    }
    out
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }
        lines.push(line);
    }
    lines
}

/// Minutes precision for people, RFC 3339 for scripts.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// A rating as five filled or empty stars.
pub fn stars(rating: i32, unicode: bool) -> String {
    let (full, empty) = if unicode { ('\u{2605}', '\u{2606}') } else { ('*', '.') };
    let filled = rating.clamp(0, MAX_RATING);
    (0..MAX_RATING)
        .map(|slot| if slot < filled { full } else { empty })
        .collect()
}

/// Joke text on one line, for tables and `key=value` output.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
