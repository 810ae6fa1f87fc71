use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Example: "2", " 3 ", "+1"
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^\s*\+?([0-9]{1,9})\s*$").unwrap();
}

/// Parses a whole-line integer. Anything else (words, decimals, negatives, empty) is `None`.
pub fn parse_number(input: &str) -> Option<usize> {
    NUMBER_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses a 1-based selection out of `count` entries and returns the 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    match parse_number(input) {
        Some(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}
