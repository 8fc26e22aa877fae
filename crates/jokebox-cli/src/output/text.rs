//! Text output formatting for jokes, favorites and history.

use jokebox_core::model::MAX_RATING;
use jokebox_core::text::highlight_parts;
use jokebox_core::{CategoryStats, FavoritesStats, HistoryEntry, Joke, RatedJoke};

use crate::ui::format::single_line;
use crate::ui::theme::{styled, styles};
use crate::ui::{
    badge, format_datetime, kv, simple_table, stars, truncate, wrap, Badge, OutputMode, UiContext,
};

const TABLE_TEXT_MAX: usize = 72;

/// Print one joke as a card (pretty) or `key=value` lines (plain).
pub fn print_joke(ctx: &UiContext, joke: &Joke, rating: i32, highlight: Option<&str>) {
    match ctx.mode {
        OutputMode::Pretty => {
            for line in card_lines(ctx, &joke.value, highlight) {
                println!("{}", line);
            }
            let mut meta = vec![
                styled(&joke.id, styles::dim(), ctx.color),
                stars(rating, ctx.unicode),
            ];
            let labels = joke.category_labels();
            if !labels.is_empty() {
                meta.push(styled(&labels.join(", "), styles::info(), ctx.color));
            }
            if rating > 4 {
                meta.push(badge(ctx, Badge::Top, ""));
            }
            println!("{}", meta.join("  "));
        }
        OutputMode::Plain => {
            println!("id={}", joke.id);
            println!("rating={}", rating);
            println!("categories={}", joke.category_labels().join(","));
            println!("value={}", single_line(&joke.value));
        }
        OutputMode::Json => {}
    }
}

/// Print search results, one row or card per joke.
pub fn print_joke_list(ctx: &UiContext, jokes: &[(&Joke, i32)], highlight: Option<&str>) {
    if ctx.mode.is_pretty() {
        for (index, (joke, rating)) in jokes.iter().enumerate() {
            if index > 0 {
                println!();
            }
            print_joke(ctx, joke, *rating, highlight);
        }
        return;
    }

    let rows: Vec<Vec<String>> = jokes
        .iter()
        .map(|(joke, rating)| {
            vec![
                joke.id.clone(),
                rating.to_string(),
                joke.category_labels().join(","),
                single_line(&joke.value),
            ]
        })
        .collect();
    println!(
        "{}",
        simple_table(ctx, &["ID", "RATING", "CATEGORIES", "JOKE"], &rows)
    );
}

pub fn print_favorites(ctx: &UiContext, favorites: &[&RatedJoke]) {
    let pretty = ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = favorites
        .iter()
        .map(|entry| {
            let text = single_line(&entry.joke.value);
            vec![
                entry.joke.id.clone(),
                if pretty && entry.is_top() {
                    format!("{} {}", stars(entry.rating, ctx.unicode), badge(ctx, Badge::Top, ""))
                } else if pretty {
                    stars(entry.rating, ctx.unicode)
                } else {
                    entry.rating.to_string()
                },
                format_datetime(&entry.viewed_at, pretty),
                entry.joke.category_labels().join(","),
                if pretty { truncate(&text, TABLE_TEXT_MAX) } else { text },
            ]
        })
        .collect();
    let headers = ["ID", "RATING", "FAVORITED", "CATEGORIES", "JOKE"];
    println!("{}", simple_table(ctx, &headers, &rows));
}

pub fn print_history(ctx: &UiContext, entries: &[HistoryEntry]) {
    let pretty = ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| vec![entry.term.clone(), format_datetime(&entry.timestamp, pretty)])
        .collect();
    println!("{}", simple_table(ctx, &["TERM", "SEARCHED"], &rows));
}

pub fn print_category_stats(ctx: &UiContext, stats: &CategoryStats) {
    let mut rows: Vec<Vec<String>> = stats
        .sorted_unique_labels
        .iter()
        .map(|label| {
            let count = stats.category_counts.get(label).copied().unwrap_or(0);
            vec![label.clone(), count.to_string()]
        })
        .collect();
    if stats.uncategorized_count > 0 {
        rows.push(vec!["(none)".to_string(), stats.uncategorized_count.to_string()]);
    }
    if rows.is_empty() {
        return;
    }
    println!("{}", simple_table(ctx, &["CATEGORY", "COUNT"], &rows));
}

pub fn print_favorites_stats(ctx: &UiContext, stats: &FavoritesStats) {
    println!("{}", kv(ctx, "Total Favorites", &stats.total_favorites.to_string()));
    for rating in (1..=MAX_RATING).rev() {
        let count = stats.rating_counts[(rating - 1) as usize];
        let label = if ctx.mode.is_pretty() {
            stars(rating, ctx.unicode)
        } else {
            format!("Rating {}", rating)
        };
        println!("{}", kv(ctx, &label, &count.to_string()));
    }
    print_category_stats(ctx, &stats.categories);
}

/// Wrap on the plain text, then style matches line by line so escape codes
/// never count towards the width.
fn card_lines(ctx: &UiContext, text: &str, term: Option<&str>) -> Vec<String> {
    wrap(text, ctx.width.saturating_sub(2).max(20))
        .into_iter()
        .map(|line| highlighted(ctx, &line, term))
        .collect()
}

fn highlighted(ctx: &UiContext, text: &str, term: Option<&str>) -> String {
    let Some(term) = term.filter(|_| ctx.color) else {
        return text.to_string();
    };
    highlight_parts(text, term)
        .into_iter()
        .map(|(part, is_match)| {
            if is_match {
                styled(part, styles::highlight(), true)
            } else {
                part.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretty(color: bool) -> UiContext {
        UiContext {
            is_tty: true,
            color,
            unicode: true,
            width: 32,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_highlight_does_not_change_line_breaks() {
        let text = "Chuck Norris once kicked a chuck wagon so hard it became a chuck norris wagon";
        let plain = card_lines(&pretty(false), text, Some("chuck"));
        let colored = card_lines(&pretty(true), text, Some("chuck"));

        assert_eq!(plain.len(), colored.len());
        assert!(colored.iter().any(|line| line.contains('\u{1b}')));
        for line in &plain {
            assert!(line.chars().count() <= 30, "{:?}", line);
        }
    }

    #[test]
    fn test_no_color_leaves_text_untouched() {
        let lines = card_lines(&pretty(false), "roundhouse kick", Some("kick"));
        assert_eq!(lines, vec!["roundhouse kick"]);
    }
}
