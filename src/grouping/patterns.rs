// file: src/grouping/patterns.rs
// description: compiled regex patterns for numeric signals in group labels
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref YEAR_RUN: Regex = Regex::new(r"[0-9]{4}").expect("YEAR_RUN regex is valid");

    pub static ref INTEGER_LABEL: Regex =
        Regex::new(r"^[+-]?[0-9]+$").expect("INTEGER_LABEL regex is valid");
}

/// Whole label as an integer, ignoring surrounding whitespace.
pub fn parse_integer_label(label: &str) -> Option<i64> {
    let trimmed = label.trim();
    if !INTEGER_LABEL.is_match(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Value of the last four-digit run in the label, e.g. `2021` for
/// `"Raport activitate 2019 (rev. 2021)"`.
pub fn last_year_run(label: &str) -> Option<i64> {
    YEAR_RUN
        .find_iter(label)
        .last()
        .and_then(|m| m.as_str().parse().ok())
}
