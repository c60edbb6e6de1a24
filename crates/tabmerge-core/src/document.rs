//! Documents and the document set accumulated by a pipeline run.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// One row rendered as column name -> field value.
pub type Document = BTreeMap<String, String>;

/// Summary computed by [`DocumentSet::inflate`]. Not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSetMeta {
    pub count: usize,
    /// Union of document keys, in order of first appearance.
    pub columns: Vec<String>,
}

/// Ordered documents, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentSet {
    documents: Vec<Document>,
    #[serde(skip)]
    meta: DocumentSetMeta,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn meta(&self) -> &DocumentSetMeta {
        &self.meta
    }

    /// Recompute the set metadata from the current documents.
    ///
    /// Documents are left untouched, so calling this any number of times
    /// yields the same set and the same JSON.
    pub fn inflate(&mut self) {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for key in self.documents.iter().flat_map(|d| d.keys()) {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
        self.meta = DocumentSetMeta {
            count: self.documents.len(),
            columns,
        };
    }

    /// Two-space indented JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON array previously written by [`DocumentSet::to_json`].
    pub fn from_json(data: &str) -> Result<Self> {
        let mut set: DocumentSet = serde_json::from_str(data)?;
        set.inflate();
        Ok(set)
    }
}

impl From<Vec<Document>> for DocumentSet {
    fn from(documents: Vec<Document>) -> Self {
        Self {
            documents,
            meta: DocumentSetMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, &str)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_inflate_counts_and_collects_columns() {
        let mut set = DocumentSet::new();
        set.push(doc(&[("id", "1"), ("name", "Alice")]));
        set.push(doc(&[("email", "b@x.io"), ("id", "2")]));
        set.inflate();
        assert_eq!(set.meta().count, 2);
        assert_eq!(set.meta().columns, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_inflate_is_idempotent() {
        let mut set = DocumentSet::new();
        set.push(doc(&[("id", "1")]));
        set.inflate();
        let once = set.clone();
        set.inflate();
        assert_eq!(set, once);
        assert_eq!(set.to_json().unwrap(), once.to_json().unwrap());
    }

    #[test]
    fn test_json_is_bare_array_with_two_space_indent() {
        let mut set = DocumentSet::new();
        set.push(doc(&[("id", "2"), ("name", "Bob")]));
        let json = set.to_json().unwrap();
        assert_eq!(json, "[\n  {\n    \"id\": \"2\",\n    \"name\": \"Bob\"\n  }\n]");
    }

    #[test]
    fn test_empty_set_serializes_to_empty_array() {
        assert_eq!(DocumentSet::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let mut set = DocumentSet::new();
        set.push(doc(&[("id", "3"), ("name", "Carol")]));
        set.push(doc(&[("id", "1"), ("name", "Alice")]));
        set.push(doc(&[("id", "2")]));
        set.inflate();
        let back = DocumentSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(back.documents(), set.documents());
        assert_eq!(back.meta(), set.meta());
    }
}
