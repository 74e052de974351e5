//! List extraction — recovers an ordered item list from bulleted, numbered or
//! comma-separated model output.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::clean_text;

/// Leading `*`, `-`, `•`, `1.` or `1)` marker.
static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[*\-•]|\d+[.)])\s*").unwrap());

/// Extracts an ordered list of cleaned items from `text`, capped at `max_items`.
///
/// Lines carrying a bullet marker are the primary source. When no bulleted
/// line yields an item (the model ignored the requested format), every line is
/// split on commas instead, so `"A, B, C"` and one-item-per-line output still
/// produce a list. Empty items never survive.
pub fn extract_list(text: &str, max_items: Option<usize>) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut items: Vec<&str> = lines
        .iter()
        .filter_map(|line| strip_marker(line))
        .filter(|rest| !rest.is_empty())
        .collect();

    if items.is_empty() {
        items = lines
            .iter()
            .flat_map(|line| strip_marker(line).unwrap_or(*line).split(','))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
    }

    if let Some(max) = max_items {
        items.truncate(max);
    }

    items
        .into_iter()
        .map(clean_text)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Returns the remainder of `line` after its bullet marker, if it has one.
fn strip_marker(line: &str) -> Option<&str> {
    BULLET_MARKER
        .find(line)
        .map(|marker| line[marker.end()..].trim())
}
