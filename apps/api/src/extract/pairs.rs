use super::list::extract_list;

/// Separators the model uses in place of the requested ` | `.
const ALTERNATE_SEPARATORS: [&str; 3] = [" - ", " — ", " – "];

/// Extracts "entity | attribute" items such as `"MIT | Computer Science"`.
///
/// Runs [`extract_list`] and rewrites alternate separators to a pipe. Lines
/// that do not split into two fields pass through unchanged.
pub fn extract_pairs(text: &str, max_items: Option<usize>) -> Vec<String> {
    extract_list(text, max_items)
        .into_iter()
        .map(|item| {
            ALTERNATE_SEPARATORS
                .iter()
                .fold(item, |acc, sep| acc.replace(sep, " | "))
        })
        .collect()
}
