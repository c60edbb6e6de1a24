use tabmerge_core::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown rule '{rule_name}' for column '{column_name}'. Run `tabmerge rules` for the list")]
    UnknownRule {
        rule_name: String,
        column_name: String,
    },
    #[error("Rule '{rule_name}' for column '{column_name}' expected field '{field}' to be set")]
    MissingRuleField {
        rule_name: String,
        column_name: String,
        field: String,
    },
    #[error("Match argument '{arg}' must look like COLUMN=RULE:VALUE")]
    InvalidMatchArg { arg: String },
    #[error("Permission mode '{value}' is not an octal number between 0 and 777")]
    InvalidPermissions { value: String },
    #[error("Delimiter '{value}' must be a single character (or 'tab')")]
    InvalidDelimiter { value: String },
    #[error("Configuration contains no input file")]
    NoInputs,
    #[error("Invalid filter")]
    Filter(#[from] TableError),
}
