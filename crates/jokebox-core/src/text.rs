//! Search-term highlighting.

use std::ops::Range;

/// Terms shorter than this are not highlighted.
pub const MIN_HIGHLIGHT_LEN: usize = 2;

/// Byte ranges in `text` matching `term`, case-insensitively, non-overlapping.
///
/// Matching folds ASCII case only, so ranges always fall on char boundaries
/// of the original text.
pub fn highlight_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let term = term.trim();
    if term.chars().count() < MIN_HIGHLIGHT_LEN {
        return Vec::new();
    }

    let haystack = text.to_ascii_lowercase();
    let needle = term.to_ascii_lowercase();
    let mut ranges = Vec::new();
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(&needle) {
        let begin = start + offset;
        let end = begin + needle.len();
        ranges.push(begin..end);
        start = end;
    }
    ranges
}

/// Split `text` into `(segment, is_match)` parts.
pub fn highlight_parts<'a>(text: &'a str, term: &str) -> Vec<(&'a str, bool)> {
    let mut parts = Vec::new();
    let mut cursor = 0;
    for range in highlight_ranges(text, term) {
        if range.start > cursor {
            parts.push((&text[cursor..range.start], false));
        }
        parts.push((&text[range.clone()], true));
        cursor = range.end;
    }
    if cursor < text.len() || parts.is_empty() {
        parts.push((&text[cursor..], false));
    }
    parts
}
