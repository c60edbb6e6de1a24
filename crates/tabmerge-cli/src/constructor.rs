use tabmerge_core::{MatchRule, MatchSet, ReadOptions, ReadOptionsBuilder, DEFAULT_FILE_MODE};

use crate::errors::ConfigError;
use crate::parser::{Config, Filter};

const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d";

/// Read options for the read-merge-filter pipeline of a job.
pub fn construct_read_options(config: &Config) -> Result<ReadOptions, ConfigError> {
    Ok(ReadOptionsBuilder::new()
        .with_delimiter(parse_delimiter(&config.delimiter)?)
        .with_strip_bom(config.strip_bom)
        .build())
}

pub fn construct_match_set(filters: &[Filter]) -> Result<MatchSet, ConfigError> {
    let mut set = MatchSet::new();
    for filter in filters {
        set.insert(filter.column.clone(), construct_rule(filter)?)?;
    }
    Ok(set)
}

fn construct_rule(filter: &Filter) -> Result<MatchRule, ConfigError> {
    let missing = |field: &str| ConfigError::MissingRuleField {
        rule_name: filter.rule.clone(),
        column_name: filter.column.clone(),
        field: field.to_string(),
    };
    let value = || filter.value.clone().ok_or_else(|| missing("value"));
    let format = || {
        filter
            .format
            .clone()
            .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string())
    };
    let inclusive = filter.inclusive.unwrap_or(false);

    let rule = match filter.rule.as_str() {
        "exact" | "eq" => MatchRule::Exact(value()?),
        "prefix" | "starts_with" => MatchRule::Prefix(value()?),
        "suffix" | "ends_with" => MatchRule::Suffix(value()?),
        "contains" => MatchRule::Contains(value()?),
        "regex" => MatchRule::Regex { pattern: value()? },
        "is_in" => {
            let members = match (&filter.values, &filter.value) {
                (Some(values), _) => values.clone(),
                (None, Some(value)) => value.split('|').map(str::to_string).collect(),
                (None, None) => return Err(missing("values")),
            };
            MatchRule::IsIn { members }
        }
        "after" => MatchRule::After {
            format: format(),
            bound: value()?,
            inclusive,
        },
        "before" => MatchRule::Before {
            format: format(),
            bound: value()?,
            inclusive,
        },
        _ => {
            return Err(ConfigError::UnknownRule {
                rule_name: filter.rule.clone(),
                column_name: filter.column.clone(),
            })
        }
    };
    Ok(rule)
}

/// Parse a `COLUMN=RULE:VALUE` command-line predicate.
///
/// `is_in` members are separated by `|`; `after`/`before` use the default
/// `%Y-%m-%d` format and are exclusive.
pub fn parse_match_arg(arg: &str) -> Result<Filter, ConfigError> {
    let invalid = || ConfigError::InvalidMatchArg {
        arg: arg.to_string(),
    };
    let (column, predicate) = arg.split_once('=').ok_or_else(invalid)?;
    let (rule, value) = predicate.split_once(':').ok_or_else(invalid)?;
    if column.is_empty() || rule.is_empty() {
        return Err(invalid());
    }
    Ok(Filter {
        column: column.to_string(),
        rule: rule.to_string(),
        value: Some(value.to_string()),
        values: None,
        format: None,
        inclusive: None,
    })
}

/// Parse an octal file mode such as `644` or `0o600`.
pub fn parse_mode(value: Option<&str>) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_FILE_MODE);
    };
    let digits = value.trim().trim_start_matches("0o");
    match u32::from_str_radix(digits, 8) {
        Ok(mode) if mode <= 0o777 => Ok(mode),
        _ => Err(ConfigError::InvalidPermissions {
            value: value.to_string(),
        }),
    }
}

/// Single character, or `tab` / `\t` for a tab.
pub fn parse_delimiter(value: &str) -> Result<char, ConfigError> {
    if matches!(value, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(column: &str, rule: &str, value: Option<&str>) -> Filter {
        Filter {
            column: column.to_string(),
            rule: rule.to_string(),
            value: value.map(str::to_string),
            values: None,
            format: None,
            inclusive: None,
        }
    }

    #[test]
    fn test_construct_match_set() {
        let filters = vec![
            filter("name", "exact", Some("Bob")),
            filter("id", "regex", Some(r"^\d+$")),
            filter("city", "is_in", Some("Paris|Berlin")),
        ];
        let set = construct_match_set(&filters).unwrap();
        let rules = set.get_rules();
        assert_eq!(rules["name"], "Exact");
        assert_eq!(rules["id"], "Regex");
        assert_eq!(rules["city"], "IsIn");
    }

    #[test]
    fn test_construct_time_rule_defaults() {
        let rule = construct_rule(&filter("day", "before", Some("2024-01-01"))).unwrap();
        assert_eq!(
            rule,
            MatchRule::Before {
                format: "%Y-%m-%d".to_string(),
                bound: "2024-01-01".to_string(),
                inclusive: false,
            }
        );
    }

    #[test]
    fn test_unknown_rule() {
        let err = construct_match_set(&[filter("name", "fuzzy", Some("Bob"))]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule { .. }));
    }

    #[test]
    fn test_missing_value() {
        let err = construct_match_set(&[filter("name", "exact", None)]).unwrap_err();
        match err {
            ConfigError::MissingRuleField { field, .. } => assert_eq!(field, "value"),
            other => panic!("Expected MissingRuleField, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_regex_surfaces_core_error() {
        let err = construct_match_set(&[filter("id", "regex", Some("("))]).unwrap_err();
        assert!(matches!(err, ConfigError::Filter(_)));
    }

    #[test]
    fn test_parse_match_arg() {
        let f = parse_match_arg("name=exact:Bob").unwrap();
        assert_eq!(f, filter("name", "exact", Some("Bob")));

        let f = parse_match_arg("url=prefix:https://a=b").unwrap();
        assert_eq!(f.column, "url");
        assert_eq!(f.value.as_deref(), Some("https://a=b"));

        assert!(parse_match_arg("name").is_err());
        assert!(parse_match_arg("name=exact").is_err());
        assert!(parse_match_arg("=exact:Bob").is_err());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(None).unwrap(), 0o644);
        assert_eq!(parse_mode(Some("600")).unwrap(), 0o600);
        assert_eq!(parse_mode(Some("0644")).unwrap(), 0o644);
        assert_eq!(parse_mode(Some("0o755")).unwrap(), 0o755);
        assert!(parse_mode(Some("999")).is_err());
        assert!(parse_mode(Some("1777")).is_err());
        assert!(parse_mode(Some("rw")).is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), ',');
        assert_eq!(parse_delimiter("tab").unwrap(), '\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
    }
}
