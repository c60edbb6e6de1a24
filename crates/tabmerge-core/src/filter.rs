//! Match predicate sets.
//!
//! A [`MatchSet`] maps column names to one compiled rule each. A row passes
//! the set when every rule accepts the row's value for its column; an empty
//! set accepts every row.

use std::collections::BTreeMap;
use std::fmt;

use crate::compiler::compile_rule;
use crate::errors::Result;
use crate::rules::{Contains, Exact, IsIn, MatchRule, Matcher, Prefix, Suffix};

pub struct Predicate {
    rule: MatchRule,
    matcher: Box<dyn Matcher>,
}

impl Predicate {
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("rule", &self.rule).finish()
    }
}

#[derive(Debug, Default)]
pub struct MatchSet {
    predicates: BTreeMap<String, Predicate>,
}

impl MatchSet {
    /// A set with no predicates, admitting every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `rule` for `column`, replacing any rule already set on it.
    pub fn insert(&mut self, column: impl Into<String>, rule: MatchRule) -> Result<()> {
        let column = column.into();
        let matcher = compile_rule(&column, &rule)?;
        self.predicates.insert(column, Predicate { rule, matcher });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Predicates in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.predicates.iter().map(|(c, p)| (c.as_str(), p))
    }

    /// Rule names per column, for display.
    pub fn get_rules(&self) -> BTreeMap<String, String> {
        self.predicates
            .iter()
            .map(|(c, p)| (c.clone(), p.rule.name().to_string()))
            .collect()
    }
}

/// Fluent construction of a [`MatchSet`].
#[derive(Debug, Default)]
pub struct MatchSetBuilder {
    set: MatchSet,
}

impl MatchSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> MatchSet {
        self.set
    }

    /// Add an arbitrary declarative rule
    pub fn with_rule(mut self, column: &str, rule: MatchRule) -> Result<Self> {
        self.set.insert(column, rule)?;
        Ok(self)
    }

    fn push(mut self, column: &str, rule: MatchRule, matcher: Box<dyn Matcher>) -> Self {
        self.set
            .predicates
            .insert(column.to_string(), Predicate { rule, matcher });
        self
    }

    pub fn exact(self, column: &str, value: &str) -> Self {
        let matcher = Box::new(Exact::new(value.to_string()));
        self.push(column, MatchRule::Exact(value.to_string()), matcher)
    }

    pub fn prefix(self, column: &str, value: &str) -> Self {
        let matcher = Box::new(Prefix::new(value.to_string()));
        self.push(column, MatchRule::Prefix(value.to_string()), matcher)
    }

    pub fn suffix(self, column: &str, value: &str) -> Self {
        let matcher = Box::new(Suffix::new(value.to_string()));
        self.push(column, MatchRule::Suffix(value.to_string()), matcher)
    }

    pub fn contains(self, column: &str, value: &str) -> Self {
        let matcher = Box::new(Contains::new(value.to_string()));
        self.push(column, MatchRule::Contains(value.to_string()), matcher)
    }

    pub fn is_in(self, column: &str, members: Vec<String>) -> Self {
        let matcher = Box::new(IsIn::new(&members));
        self.push(column, MatchRule::IsIn { members }, matcher)
    }

    /// Match against a regex pattern, validated here
    pub fn regex(self, column: &str, pattern: &str) -> Result<Self> {
        self.with_rule(
            column,
            MatchRule::Regex {
                pattern: pattern.to_string(),
            },
        )
    }

    pub fn after(self, column: &str, format: &str, bound: &str, inclusive: bool) -> Result<Self> {
        self.with_rule(
            column,
            MatchRule::After {
                format: format.to_string(),
                bound: bound.to_string(),
                inclusive,
            },
        )
    }

    pub fn before(self, column: &str, format: &str, bound: &str, inclusive: bool) -> Result<Self> {
        self.with_rule(
            column,
            MatchRule::Before {
                format: format.to_string(),
                bound: bound.to_string(),
                inclusive,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TableError;

    #[test]
    fn test_builder_collects_rules() {
        let set = MatchSetBuilder::new()
            .exact("name", "Bob")
            .contains("email", "@")
            .regex("id", r"^\d+$")
            .unwrap()
            .build();
        assert_eq!(set.len(), 3);
        let rules = set.get_rules();
        assert_eq!(rules["name"], "Exact");
        assert_eq!(rules["email"], "Contains");
        assert_eq!(rules["id"], "Regex");
    }

    #[test]
    fn test_later_rule_replaces_earlier() {
        let set = MatchSetBuilder::new()
            .exact("name", "Bob")
            .prefix("name", "A")
            .build();
        assert_eq!(set.len(), 1);
        let (_, predicate) = set.iter().next().unwrap();
        assert_eq!(predicate.rule(), &MatchRule::Prefix("A".to_string()));
        assert!(predicate.is_match("Alice"));
    }

    #[test]
    fn test_invalid_regex_fails_at_build() {
        let res = MatchSetBuilder::new().regex("id", "[invalid(");
        assert!(matches!(res, Err(TableError::InvalidRule { .. })));
    }

    #[test]
    fn test_empty_set() {
        let set = MatchSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
