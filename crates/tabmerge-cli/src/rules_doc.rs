/// Print the reference of every match rule
pub fn print_rules_documentation() {
    println!("{}", rules_documentation());
}

fn rules_documentation() -> String {
    format!(
        r#"
TABMERGE MATCH RULES
====================
{}
{}
{}
"#,
        semantics_section(),
        string_rules_section(),
        time_rules_section()
    )
}

fn semantics_section() -> String {
    r#"
SEMANTICS
  • One rule per column; every rule must pass for a row to be kept (AND).
  • No rule at all keeps every row.
  • A rule on a column missing from a file's header aborts the run.
  • A rule on a column the row is too short to hold rejects the row.
"#
    .to_string()
}

fn string_rules_section() -> String {
    r#"
STRING RULES (case-sensitive)
  exact     value equals VALUE                 --match name=exact:Bob
  prefix    value starts with VALUE            --match sku=prefix:EU-
  suffix    value ends with VALUE              --match email=suffix:@example.com
  contains  value contains VALUE               --match note=contains:urgent
  regex     value matches the pattern VALUE    --match id=regex:^\d+$
  is_in     value is one of VALUE1|VALUE2|...  --match city=is_in:Paris|Berlin
            (TOML: values = ["Paris", "Berlin"])
"#
    .to_string()
}

fn time_rules_section() -> String {
    r#"
TIME RULES
  after     value is later than VALUE          --match day=after:2024-01-01
  before    value is earlier than VALUE        --match day=before:2024-01-01
            Values are parsed with `format` (default %Y-%m-%d), as a
            date-time first, then as a date. Unparsable values never match.
            TOML: inclusive = true also keeps values equal to the bound.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_lists_every_rule() {
        let doc = rules_documentation();
        for rule in [
            "exact", "prefix", "suffix", "contains", "regex", "is_in", "after", "before",
        ] {
            assert!(doc.contains(rule), "missing rule {}", rule);
        }
    }
}
