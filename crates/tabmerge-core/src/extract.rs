//! Single-column extraction over the simple reader.

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::readers::{read_simple, ReadOptions};
use crate::utils::strings::condense_unique_sorted;

/// Values of column `col` (zero-based) across `paths`, in file then row
/// order. Rows too short to hold the column are skipped, as are blank path
/// entries. With `condense`, values are whitespace-normalized, emptied
/// values dropped, and the rest de-duplicated and sorted.
pub fn read_column_values<S: AsRef<str>>(
    paths: &[S],
    options: &ReadOptions,
    col: usize,
    condense: bool,
) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for raw in paths {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }
        values.extend(read_file_column_values(raw, options, col, false)?);
    }
    if condense {
        values = condense_unique_sorted(values);
    }
    Ok(values)
}

/// [`read_column_values`] for a single file.
pub fn read_file_column_values(
    path: impl AsRef<Path>,
    options: &ReadOptions,
    col: usize,
    condense: bool,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let tbl = read_simple(path, options)?;
    let mut values: Vec<String> = tbl
        .records
        .into_iter()
        .filter_map(|mut row| (row.len() > col).then(|| row.swap_remove(col)))
        .collect();
    debug!(path = %path.display(), col, values = values.len(), "extracted column");
    if condense {
        values = condense_unique_sorted(values);
    }
    Ok(values)
}
