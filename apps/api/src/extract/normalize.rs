use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Folds line breaks and backslashes into spaces, collapses whitespace runs
/// and trims both ends.
pub fn clean_text(input: &str) -> String {
    let folded = input.replace(['\r', '\n', '\\'], " ");
    MULTI_SPACE.replace_all(&folded, " ").trim().to_string()
}
