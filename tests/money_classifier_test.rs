//! Money-presence classification over report text

use newsharvest::contains_money;

#[test]
fn recognizes_the_supported_formats() {
    assert!(contains_money("$1,234.56"));
    assert!(contains_money("20 dollars"));
    assert!(contains_money("15 USD"));
}

#[test]
fn rejects_text_without_amounts() {
    assert!(!contains_money("no money here"));
}

#[test]
fn is_case_insensitive() {
    assert!(contains_money("Savings of 20 DOLLARS this week"));
    assert!(contains_money("fined 15 usd at the border"));
}

#[test]
fn classification_is_idempotent() {
    for text in ["$1,234.56", "no money here", "20 dollars"] {
        assert_eq!(contains_money(text), contains_money(text));
    }
}
