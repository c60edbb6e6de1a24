pub mod string;
pub mod time;

pub use string::{Contains, Exact, IsIn, Prefix, RegexMatch, Suffix};
pub use time::TimeBoundary;

/// A predicate evaluated against a single field value.
pub trait Matcher: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Whether `value` satisfies the rule.
    fn is_match(&self, value: &str) -> bool;
}

/// Declarative form of every match rule understood by the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchRule {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
    Regex {
        pattern: String,
    },
    IsIn {
        members: Vec<String>,
    },
    /// Field parsed with `format` must fall after `bound`
    After {
        format: String,
        bound: String,
        inclusive: bool,
    },
    /// Field parsed with `format` must fall before `bound`
    Before {
        format: String,
        bound: String,
        inclusive: bool,
    },
}

impl MatchRule {
    pub fn name(&self) -> &'static str {
        match self {
            MatchRule::Exact(_) => "Exact",
            MatchRule::Prefix(_) => "Prefix",
            MatchRule::Suffix(_) => "Suffix",
            MatchRule::Contains(_) => "Contains",
            MatchRule::Regex { .. } => "Regex",
            MatchRule::IsIn { .. } => "IsIn",
            MatchRule::After { .. } => "After",
            MatchRule::Before { .. } => "Before",
        }
    }
}
