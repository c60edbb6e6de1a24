//! Per-row progress hooks for the read loops.

use std::path::Path;

use tracing::trace;

/// Receives progress events while a file is read.
///
/// `index` counts every parsed row of the file, header included, from 0.
pub trait RowObserver {
    fn on_file_start(&mut self, _path: &Path) {}
    fn on_row(&mut self, path: &Path, index: usize, row: &[String]);
    fn on_file_end(&mut self, _path: &Path, _rows: usize) {}
}

impl<F> RowObserver for F
where
    F: FnMut(&Path, usize, &[String]),
{
    fn on_row(&mut self, path: &Path, index: usize, row: &[String]) {
        self(path, index, row)
    }
}

/// Observer that does nothing.
pub struct NoopObserver;

impl RowObserver for NoopObserver {
    fn on_row(&mut self, _path: &Path, _index: usize, _row: &[String]) {}
}

/// Emits a `trace!` event for every row past `after`.
pub struct TraceRows {
    after: usize,
}

impl TraceRows {
    pub fn after(after: usize) -> Self {
        Self { after }
    }
}

impl RowObserver for TraceRows {
    fn on_file_start(&mut self, path: &Path) {
        trace!(path = %path.display(), "reading rows");
    }

    fn on_row(&mut self, path: &Path, index: usize, row: &[String]) {
        if index > self.after {
            trace!(path = %path.display(), index, row = %row.join(","));
        }
    }

    fn on_file_end(&mut self, path: &Path, rows: usize) {
        trace!(path = %path.display(), rows, "rows read");
    }
}
