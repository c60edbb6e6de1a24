//! Read -> merge -> filter -> emit.
//!
//! Each input file is read with the quoting-aware reader. Its first row is
//! the file's header; every following row is mapped to a document and kept
//! when it satisfies the [`MatchSet`]. Files and rows are processed strictly
//! in order and the first error aborts the run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::document::DocumentSet;
use crate::errors::{Result, TableError};
use crate::filter::MatchSet;
use crate::header::{BoundFilter, Header};
use crate::observer::{NoopObserver, RowObserver};
use crate::readers::{for_each_row, ReadOptions};

/// Default mode for emitted JSON files.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Read every file in `paths`, keep the rows accepted by `filter` and return
/// them as an inflated [`DocumentSet`].
///
/// Only `delimiter` and `strip_bom` of `options` apply here; the first row
/// of every file is always its header.
pub fn read_merge_filter<P: AsRef<Path>>(
    paths: &[P],
    options: &ReadOptions,
    filter: &MatchSet,
) -> Result<DocumentSet> {
    read_merge_filter_with(paths, options, filter, &mut NoopObserver)
}

/// [`read_merge_filter`], reporting every parsed row to `observer`.
pub fn read_merge_filter_with<P: AsRef<Path>>(
    paths: &[P],
    options: &ReadOptions,
    filter: &MatchSet,
    observer: &mut dyn RowObserver,
) -> Result<DocumentSet> {
    let options = ReadOptions {
        has_header: true,
        trim_space: false,
        trim_leading_space: false,
        ..options.clone()
    };
    let mut data = DocumentSet::new();

    for path in paths {
        let path = path.as_ref();
        let before = data.len();
        let mut header = Header::default();
        let mut bound: Option<BoundFilter> = None;

        let rows = for_each_row(path, &options, observer, |index, row| {
            if index == 0 {
                header = Header::new(row);
                bound = Some(header.bind(filter, path)?);
                return Ok(());
            }
            let accepted = bound.as_ref().is_some_and(|b| b.matches(&row));
            if accepted {
                data.push(header.record_to_document(&row));
            }
            Ok(())
        })?;
        // A file without a header row still has to declare every filter column
        if bound.is_none() {
            header.bind(filter, path)?;
        }

        debug!(
            path = %path.display(),
            rows = rows.saturating_sub(1),
            accepted = data.len() - before,
            "filtered file"
        );
    }

    data.inflate();
    info!(
        files = paths.len(),
        documents = data.len(),
        "read-merge-filter complete"
    );
    Ok(data)
}

/// Run [`read_merge_filter`] and write the documents to `out_path` as
/// two-space indented JSON. On Unix the file is created with `mode`.
pub fn merge_filter_to_json<P: AsRef<Path>>(
    paths: &[P],
    out_path: impl AsRef<Path>,
    options: &ReadOptions,
    filter: &MatchSet,
    mode: u32,
) -> Result<DocumentSet> {
    let data = read_merge_filter(paths, options, filter)?;
    write_documents(&data, out_path.as_ref(), mode)?;
    Ok(data)
}

/// Serialize `data` and write it to `path`, truncating any existing file.
pub fn write_documents(data: &DocumentSet, path: &Path, mode: u32) -> Result<()> {
    let json = data.to_json()?;
    let write_err = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut open = OpenOptions::new();
    open.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = open.open(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    info!(path = %path.display(), documents = data.len(), "wrote documents");
    Ok(())
}
