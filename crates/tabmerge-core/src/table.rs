//! In-memory representation of a delimited dataset.

use crate::document::Document;
use crate::errors::{Result, TableError};
use crate::header::Header;

/// Ordered column names plus ordered raw rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed rows, taking the first row as the header
    /// when `has_header` is set.
    pub fn from_rows(rows: Vec<Vec<String>>, has_header: bool) -> Self {
        let mut rows = rows.into_iter();
        let columns = if has_header {
            rows.next().unwrap_or_default()
        } else {
            Vec::new()
        };
        Self {
            columns,
            records: rows.collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of records, header excluded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn header(&self) -> Header {
        Header::new(self.columns.clone())
    }

    /// Render every record as a header-keyed document.
    pub fn to_documents(&self) -> Vec<Document> {
        let header = self.header();
        self.records
            .iter()
            .map(|record| header.record_to_document(record))
            .collect()
    }

    /// Feed every record to `on_record`, stopping at the first failure.
    pub fn unmarshal<F, E>(&self, mut on_record: F) -> Result<()>
    where
        F: FnMut(&[String]) -> std::result::Result<(), E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        for (index, record) in self.records.iter().enumerate() {
            on_record(record).map_err(|e| TableError::Record {
                index,
                source: e.into(),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_from_rows_with_header() {
        let tbl = Table::from_rows(rows(&[&["id", "name"], &["1", "Alice"]]), true);
        assert_eq!(tbl.columns(), &["id".to_string(), "name".to_string()]);
        assert_eq!(tbl.len(), 1);
    }

    #[test]
    fn test_from_rows_without_header() {
        let tbl = Table::from_rows(rows(&[&["id", "name"], &["1", "Alice"]]), false);
        assert!(tbl.columns().is_empty());
        assert_eq!(tbl.len(), 2);
    }

    #[test]
    fn test_from_rows_empty() {
        let tbl = Table::from_rows(Vec::new(), true);
        assert!(tbl.columns().is_empty());
        assert!(tbl.is_empty());
    }

    #[test]
    fn test_to_documents() {
        let tbl = Table::from_rows(rows(&[&["id", "name"], &["1", "Alice"], &["2"]]), true);
        let docs = tbl.to_documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get("name").map(String::as_str), Some("Alice"));
        assert!(!docs[1].contains_key("name"));
    }

    #[test]
    fn test_unmarshal_reports_record_index() {
        let tbl = Table::from_rows(rows(&[&["n"], &["1"], &["x"], &["3"]]), true);
        let mut total = 0;
        let err = tbl
            .unmarshal(|record| {
                total += record[0].parse::<i64>()?;
                Ok::<(), std::num::ParseIntError>(())
            })
            .unwrap_err();
        match err {
            TableError::Record { index, .. } => assert_eq!(index, 1),
            other => panic!("Expected Record error, got {other:?}"),
        }
        assert_eq!(total, 1);
    }
}
