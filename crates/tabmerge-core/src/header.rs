//! Header matcher.
//!
//! Maps raw rows to header-keyed documents and evaluates rows against a
//! [`MatchSet`]. Rows narrower than the header leave trailing keys absent,
//! rows wider than the header drop their extra fields.

use std::collections::HashMap;
use std::path::Path;

use crate::document::Document;
use crate::errors::{Result, TableError};
use crate::filter::{MatchSet, Predicate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(columns.len());
        // First occurrence wins on duplicated names
        for (i, c) in columns.iter().enumerate() {
            positions.entry(c.clone()).or_insert(i);
        }
        Self { columns, positions }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of `column`, if the header declares it.
    pub fn index(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Zip column names with row fields positionally.
    pub fn record_to_document(&self, row: &[String]) -> Document {
        self.columns
            .iter()
            .zip(row.iter())
            .map(|(c, v)| (c.clone(), v.clone()))
            .collect()
    }

    /// AND over every predicate in `filter`; an empty set always passes.
    ///
    /// Fails with [`TableError::UnknownColumn`] when a predicate names a
    /// column this header does not declare.
    pub fn record_match(&self, row: &[String], filter: &MatchSet) -> Result<bool> {
        for (column, predicate) in filter.iter() {
            let idx = self.index(column).ok_or_else(|| TableError::UnknownColumn {
                column: column.to_string(),
                path: None,
            })?;
            if !row.get(idx).is_some_and(|v| predicate.is_match(v)) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Resolve every predicate of `filter` to a column position once, so rows
    /// of a file can be tested without per-row lookups.
    pub fn bind<'a>(&self, filter: &'a MatchSet, path: &Path) -> Result<BoundFilter<'a>> {
        let predicates = filter
            .iter()
            .map(|(column, predicate)| {
                self.index(column)
                    .map(|idx| (idx, predicate))
                    .ok_or_else(|| TableError::UnknownColumn {
                        column: column.to_string(),
                        path: Some(path.to_path_buf()),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(BoundFilter { predicates })
    }
}

/// A [`MatchSet`] resolved against one header.
pub struct BoundFilter<'a> {
    predicates: Vec<(usize, &'a Predicate)>,
}

impl BoundFilter<'_> {
    /// A predicate on a column missing from a short row does not match.
    pub fn matches(&self, row: &[String]) -> bool {
        self.predicates
            .iter()
            .all(|(idx, predicate)| row.get(*idx).is_some_and(|v| predicate.is_match(v)))
    }
}
