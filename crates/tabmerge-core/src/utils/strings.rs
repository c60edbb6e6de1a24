use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run to a single space and trim the ends.
pub fn condense_space(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value.trim(), " ").into_owned()
}

/// Condense each value, drop the empty ones, de-duplicate and sort.
pub fn condense_unique_sorted(values: Vec<String>) -> Vec<String> {
    values
        .iter()
        .map(|v| condense_space(v))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
