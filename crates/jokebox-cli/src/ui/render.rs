//! Building blocks for command output: titles, badges, fields, tables.
//!
//! Everything returns a `String` (or prints nothing) in JSON mode so callers
//! never interleave decorations with a JSON document.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// First line of a command's output.
pub fn header(ctx: &UiContext, command: &str, detail: Option<&str>) -> String {
    match (ctx.mode, detail) {
        (OutputMode::Json, _) => String::new(),
        (OutputMode::Plain, _) => format!("jokebox {}", command),
        (OutputMode::Pretty, Some(detail)) => format!(
            "{} {} {}",
            styled("jokebox", styles::bold(), ctx.color),
            command,
            styled(&format!("\u{00B7} {}", detail), styles::dim(), ctx.color)
        ),
        (OutputMode::Pretty, None) => {
            format!("{} {}", styled("jokebox", styles::bold(), ctx.color), command)
        }
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

/// `Label: value` for people, `label=value` for scripts.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled(&format!("{}:", key), styles::dim(), ctx.color), value)
    } else {
        let key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{}={}", key, value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        styled(&format!("Hint: {}", text), styles::dim(), ctx.color)
    } else {
        format!("hint={}", text)
    }
}

/// Borderless table in pretty mode; tab-separated rows without a header
/// line otherwise.
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(headers.iter().map(|title| {
            let cell = Cell::new(title);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        }));
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    table.to_string()
}

/// Print `message` unless output is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}
