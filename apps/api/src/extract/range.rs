use once_cell::sync::Lazy;
use regex::Regex;

use super::list::extract_list;
use super::normalize::clean_text;

/// `$70,000–$110,000`, `$70,000.00 - 110,000.00`, `$70k to $90k` shaped amounts.
static CURRENCY_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\$\d(?:[\d,]*\d)?(?:\.\d{1,2})?k?(?:\s*[-–—]\s*|\s*\bto\b\s*)\$?\d(?:[\d,]*\d)?(?:\.\d{1,2})?k?",
    )
    .unwrap()
});

/// Extracts a currency range from free text.
///
/// Tries, in order: a currency-range match, the first list item, then the
/// cleaned raw text. Prose input therefore comes back verbatim (cleaned)
/// rather than empty.
pub fn extract_range(text: &str) -> String {
    let collapsed = clean_text(text);
    if let Some(found) = CURRENCY_RANGE.find(&collapsed) {
        return clean_text(found.as_str());
    }

    extract_list(text, Some(1))
        .into_iter()
        .next()
        .unwrap_or(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inside_sentence() {
        assert_eq!(
            extract_range("Sure! The range is $70,000–$110,000 for entry level."),
            "$70,000–$110,000"
        );
    }

    #[test]
    fn test_word_separator_and_optional_second_dollar() {
        assert_eq!(
            extract_range("Typically $55,000 to 80,000 per year"),
            "$55,000 to 80,000"
        );
        assert_eq!(extract_range("$60,000 — $95,000"), "$60,000 — $95,000");
    }

    #[test]
    fn test_range_split_across_lines() {
        assert_eq!(extract_range("$48,000 -\n$62,000"), "$48,000 - $62,000");
    }

    #[test]
    fn test_trailing_punctuation_is_not_captured() {
        assert_eq!(
            extract_range("Expect $70,000-$90,000, depending on city."),
            "$70,000-$90,000"
        );
    }

    #[test]
    fn test_amounts_with_cents() {
        assert_eq!(
            extract_range("$70,000.00 - $90,000.00"),
            "$70,000.00 - $90,000.00"
        );
        assert_eq!(
            extract_range("The range is $52,500.50 to $61,000.75 per year."),
            "$52,500.50 to $61,000.75"
        );
    }

    #[test]
    fn test_prose_falls_back_to_cleaned_text() {
        let text = "about seventy to a hundred ten thousand";
        assert_eq!(extract_range(text), text);
    }

    #[test]
    fn test_bulleted_prose_falls_back_to_first_item() {
        assert_eq!(
            extract_range("* Around seventy thousand\n* Varies by region"),
            "Around seventy thousand"
        );
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert_eq!(extract_range(""), "");
    }
}
