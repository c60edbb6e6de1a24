use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    /// The source file could not be opened
    #[error("Failed to open '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file was opened but could not be read to completion
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed row structure: undecodable bytes or a quoted field left open
    #[error("Malformed CSV in '{}' near record {}: {source}", .path.display(), .record.map(|r| r.to_string()).unwrap_or_else(|| "?".to_string()))]
    Decode {
        path: PathBuf,
        record: Option<u64>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Two files of a merge declare different column lists
    #[error(
        "CSV table definition mismatch [{}] AND [{}] for files '{}' and '{}'",
        .expected.join(","),
        .found.join(","),
        .reference.display(),
        .path.display()
    )]
    SchemaMismatch {
        reference: PathBuf,
        expected: Vec<String>,
        path: PathBuf,
        found: Vec<String>,
    },

    /// A match predicate names a column the header does not have
    #[error("Filter column '{column}' not found in header of '{}'", .path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<table>".to_string()))]
    UnknownColumn {
        column: String,
        path: Option<PathBuf>,
    },

    /// A match rule could not be compiled (bad regex, bad time bound, ...)
    #[error("Invalid rule '{rule}' for column '{column}': {message}")]
    InvalidRule {
        rule: String,
        column: String,
        message: String,
    },

    #[error("Delimiter {0:?} is not a single-byte ASCII character")]
    InvalidDelimiter(char),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A state the merge logic should never reach
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// A record callback failed during `Table::unmarshal`
    #[error("Error on record index [{index}]: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The input ended inside a quoted field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("quoted field opened at byte {byte} is never closed")]
pub struct UnterminatedQuote {
    pub byte: u64,
}
