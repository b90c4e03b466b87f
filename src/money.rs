//! Money-presence classifier for article text
//!
//! Flags whether a piece of text mentions a monetary amount. This is a
//! presence check only; the amount itself is never parsed or returned.

use once_cell::sync::Lazy;
use regex::Regex;

/// Combined money pattern, matched case-insensitively anywhere in the text.
///
/// Three alternatives are accepted:
/// - `$111,111.11` / `$11.1` (currency symbol, optional thousands separators,
///   optional two-digit decimal group)
/// - `11 dollars`
/// - `11 USD`
static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\$\d{1,3}(,\d{3})*(\.\d{2})?|\b\d{1,3}(,\d{3})*(\.\d{2})?\s+dollars?\b|\b\d{1,3}(,\d{3})*(\.\d{2})?\s+USD\b",
    )
    .expect("money pattern is a valid regex")
});

/// Check whether `text` mentions any amount of money.
#[must_use]
pub fn contains_money(text: &str) -> bool {
    MONEY_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_symbol_amounts() {
        assert!(contains_money("$1,234.56"));
        assert!(contains_money("$11.1"));
        assert!(contains_money("price jumped to $5 overnight"));
    }

    #[test]
    fn matches_word_amounts() {
        assert!(contains_money("20 dollars"));
        assert!(contains_money("1 dollar"));
        assert!(contains_money("15 USD"));
        assert!(contains_money("15 usd"));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(!contains_money("no money here"));
        assert!(!contains_money("dollars without a number"));
        assert!(!contains_money(""));
    }
}
