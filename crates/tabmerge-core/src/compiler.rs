//! Rule compilation.
//!
//! Turns a declarative [`MatchRule`] into the [`Matcher`] trait object the
//! header matcher evaluates per row. Compilation is where malformed rules
//! (bad regex, unparsable time bound) are rejected, so a broken filter fails
//! before any file is opened.

use crate::errors::{Result, TableError};
use crate::rules::{
    Contains, Exact, IsIn, MatchRule, Matcher, Prefix, RegexMatch, Suffix, TimeBoundary,
};

pub fn compile_rule(column: &str, rule: &MatchRule) -> Result<Box<dyn Matcher>> {
    let invalid = |message: String| TableError::InvalidRule {
        rule: rule.name().to_string(),
        column: column.to_string(),
        message,
    };

    let matcher: Box<dyn Matcher> = match rule {
        MatchRule::Exact(s) => Box::new(Exact::new(s.clone())),
        MatchRule::Prefix(s) => Box::new(Prefix::new(s.clone())),
        MatchRule::Suffix(s) => Box::new(Suffix::new(s.clone())),
        MatchRule::Contains(s) => Box::new(Contains::new(s.clone())),
        MatchRule::Regex { pattern } => Box::new(
            RegexMatch::new(pattern)
                .map_err(|e| invalid(format!("invalid regex pattern '{}': {}", pattern, e)))?,
        ),
        MatchRule::IsIn { members } => Box::new(IsIn::new(members)),
        MatchRule::After {
            format,
            bound,
            inclusive,
        } => Box::new(
            TimeBoundary::new(format.clone(), bound, true, *inclusive).ok_or_else(|| {
                invalid(format!("bound '{}' does not match format '{}'", bound, format))
            })?,
        ),
        MatchRule::Before {
            format,
            bound,
            inclusive,
        } => Box::new(
            TimeBoundary::new(format.clone(), bound, false, *inclusive).ok_or_else(|| {
                invalid(format!("bound '{}' does not match format '{}'", bound, format))
            })?,
        ),
    };
    Ok(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_rule_name() {
        let rules = vec![
            MatchRule::Exact("a".to_string()),
            MatchRule::Prefix("a".to_string()),
            MatchRule::Suffix("a".to_string()),
            MatchRule::Contains("a".to_string()),
            MatchRule::Regex {
                pattern: "^a".to_string(),
            },
            MatchRule::IsIn {
                members: vec!["a".to_string()],
            },
            MatchRule::After {
                format: "%Y-%m-%d".to_string(),
                bound: "2020-01-01".to_string(),
                inclusive: true,
            },
        ];
        for rule in rules {
            let matcher = compile_rule("col", &rule).unwrap();
            assert_eq!(matcher.name(), rule.name());
        }
    }

    #[test]
    fn test_compile_bad_regex() {
        let rule = MatchRule::Regex {
            pattern: "(".to_string(),
        };
        match compile_rule("col", &rule) {
            Err(TableError::InvalidRule { rule, column, .. }) => {
                assert_eq!(rule, "Regex");
                assert_eq!(column, "col");
            }
            _ => panic!("Expected InvalidRule"),
        }
    }

    #[test]
    fn test_compile_bad_time_bound() {
        let rule = MatchRule::Before {
            format: "%Y-%m-%d".to_string(),
            bound: "yesterday".to_string(),
            inclusive: false,
        };
        assert!(matches!(
            compile_rule("day", &rule),
            Err(TableError::InvalidRule { .. })
        ));
    }

    #[test]
    fn test_compile_time_rule() {
        let rule = MatchRule::After {
            format: "%Y-%m-%d".to_string(),
            bound: "2020-01-01".to_string(),
            inclusive: false,
        };
        let matcher = compile_rule("day", &rule).unwrap();
        assert!(matcher.is_match("2021-06-01"));
        assert!(!matcher.is_match("2019-06-01"));
    }
}
