//! Multi-file table merge.
//!
//! Concatenates files read with the simple reader into one [`Table`]. The
//! first non-blank path fixes the reference column list; every later file
//! must declare exactly the same columns, in the same order.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{Result, TableError};
use crate::readers::{read_simple, ReadOptions};
use crate::table::Table;

/// Merge `paths` in list order. Blank entries are skipped.
pub fn merge_table_files<S: AsRef<str>>(paths: &[S], options: &ReadOptions) -> Result<Table> {
    let mut merged = Table::new();
    let mut reference: Option<PathBuf> = None;
    let mut files = 0;

    for raw in paths {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            warn!("skipping blank path entry");
            continue;
        }
        let path = Path::new(raw);
        let tbl = read_simple(path, options)?;
        debug!(path = %path.display(), rows = tbl.len(), "read table file");

        match &reference {
            None => {
                merged.columns = tbl.columns;
                reference = Some(path.to_path_buf());
            }
            Some(reference) if merged.columns != tbl.columns => {
                if merged.columns.is_empty() {
                    return Err(TableError::InternalInvariant(format!(
                        "empty reference schema from '{}' compared against '{}'",
                        reference.display(),
                        path.display()
                    )));
                }
                return Err(TableError::SchemaMismatch {
                    reference: reference.clone(),
                    expected: merged.columns,
                    path: path.to_path_buf(),
                    found: tbl.columns,
                });
            }
            Some(_) => {}
        }

        merged.records.extend(tbl.records);
        files += 1;
    }

    info!(
        files,
        columns = merged.columns.len(),
        rows = merged.len(),
        "merged table files"
    );
    Ok(merged)
}
