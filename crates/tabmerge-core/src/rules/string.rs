use std::collections::HashSet;

use regex::Regex;

use crate::{rules::Matcher, utils::hasher::Xxh3Builder};

/// Field equals the expected string.
pub struct Exact {
    expected: String,
}

impl Exact {
    pub fn new(expected: String) -> Self {
        Self { expected }
    }
}

impl Matcher for Exact {
    fn name(&self) -> &'static str {
        "Exact"
    }

    fn is_match(&self, value: &str) -> bool {
        value == self.expected
    }
}

pub struct Prefix {
    prefix: String,
}

impl Prefix {
    pub fn new(prefix: String) -> Self {
        Self { prefix }
    }
}

impl Matcher for Prefix {
    fn name(&self) -> &'static str {
        "Prefix"
    }

    fn is_match(&self, value: &str) -> bool {
        value.starts_with(self.prefix.as_str())
    }
}

pub struct Suffix {
    suffix: String,
}

impl Suffix {
    pub fn new(suffix: String) -> Self {
        Self { suffix }
    }
}

impl Matcher for Suffix {
    fn name(&self) -> &'static str {
        "Suffix"
    }

    fn is_match(&self, value: &str) -> bool {
        value.ends_with(self.suffix.as_str())
    }
}

pub struct Contains {
    needle: String,
}

impl Contains {
    pub fn new(needle: String) -> Self {
        Self { needle }
    }
}

impl Matcher for Contains {
    fn name(&self) -> &'static str {
        "Contains"
    }

    fn is_match(&self, value: &str) -> bool {
        value.contains(self.needle.as_str())
    }
}

/// Field matches a compiled regular expression (unanchored).
pub struct RegexMatch {
    regex: Regex,
}

impl RegexMatch {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for RegexMatch {
    fn name(&self) -> &'static str {
        "Regex"
    }

    fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Field is one of a fixed set of members.
pub struct IsIn {
    members: HashSet<String, Xxh3Builder>,
}

impl IsIn {
    pub fn new(members: &[String]) -> Self {
        Self {
            members: members.iter().cloned().collect(),
        }
    }
}

impl Matcher for IsIn {
    fn name(&self) -> &'static str {
        "IsIn"
    }

    fn is_match(&self, value: &str) -> bool {
        self.members.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        let rule = Exact::new("Bob".to_string());
        assert!(rule.is_match("Bob"));
        assert!(!rule.is_match("bob"));
        assert!(!rule.is_match("Bobby"));
    }

    #[test]
    fn test_prefix_suffix_contains() {
        assert!(Prefix::new("ab".to_string()).is_match("abc"));
        assert!(!Prefix::new("bc".to_string()).is_match("abc"));
        assert!(Suffix::new("bc".to_string()).is_match("abc"));
        assert!(!Suffix::new("ab".to_string()).is_match("abc"));
        assert!(Contains::new("b".to_string()).is_match("abc"));
        assert!(!Contains::new("z".to_string()).is_match("abc"));
    }

    #[test]
    fn test_empty_needles_match_everything() {
        assert!(Prefix::new(String::new()).is_match(""));
        assert!(Contains::new(String::new()).is_match("anything"));
    }

    #[test]
    fn test_regex_match() {
        let rule = RegexMatch::new(r"^\d{3}$").unwrap();
        assert!(rule.is_match("123"));
        assert!(!rule.is_match("12"));
        assert!(!rule.is_match("abc"));
    }

    #[test]
    fn test_regex_invalid_pattern() {
        assert!(RegexMatch::new("[invalid(").is_err());
    }

    #[test]
    fn test_is_in() {
        let rule = IsIn::new(&["apple".to_string(), "banana".to_string()]);
        assert!(rule.is_match("apple"));
        assert!(!rule.is_match("Apple"));
        assert!(!rule.is_match(""));
    }

    #[test]
    fn test_is_in_empty_members() {
        let rule = IsIn::new(&[]);
        assert!(!rule.is_match("apple"));
    }
}
