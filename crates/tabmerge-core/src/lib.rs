//! Merge delimited files into tables or filtered JSON documents.
//!
//! ```no_run
//! use tabmerge_core::{read_merge_filter, MatchSetBuilder, ReadOptions};
//!
//! let filter = MatchSetBuilder::new().exact("name", "Bob").build();
//! let docs = read_merge_filter(&["a.csv", "b.csv"], &ReadOptions::default(), &filter)?;
//! println!("{}", docs.to_json()?);
//! # Ok::<(), tabmerge_core::TableError>(())
//! ```

pub mod compiler;
pub mod document;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod header;
pub mod merger;
pub mod observer;
pub mod pipeline;
pub mod readers;
pub mod rules;
pub mod table;
pub mod utils;

pub use document::{Document, DocumentSet, DocumentSetMeta};
pub use errors::{Result, TableError, UnterminatedQuote};
pub use extract::{read_column_values, read_file_column_values};
pub use filter::{MatchSet, MatchSetBuilder};
pub use header::Header;
pub use merger::merge_table_files;
pub use observer::{RowObserver, TraceRows};
pub use pipeline::{
    merge_filter_to_json, read_merge_filter, read_merge_filter_with, write_documents,
    DEFAULT_FILE_MODE,
};
pub use readers::{read_file, read_simple, ReadOptions, ReadOptionsBuilder};
pub use rules::MatchRule;
pub use table::Table;
