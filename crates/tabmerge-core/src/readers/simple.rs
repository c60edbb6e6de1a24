//! Line-split reader without quoting awareness.
//!
//! Lines are split on `\n` and then on the delimiter string. Quoted fields
//! containing the delimiter are split like any other text; use
//! [`crate::readers::read_file`] for such input.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{Result, TableError};
use crate::readers::ReadOptions;
use crate::table::Table;

pub fn read_simple(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Table> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => TableError::Read {
            path: path.to_path_buf(),
            source,
        },
        _ => TableError::FileOpen {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(parse_simple(&data, options))
}

/// Split `data` into a [`Table`] the same way [`read_simple`] does.
pub fn parse_simple(data: &str, options: &ReadOptions) -> Table {
    let mut delimiter = [0u8; 4];
    let delimiter: &str = options.delimiter.encode_utf8(&mut delimiter);

    let rows = data
        .lines()
        .map(|line| {
            let line = if options.trim_space { line.trim() } else { line };
            line.split(delimiter)
                .map(|field| {
                    if options.trim_space {
                        field.trim().to_string()
                    } else {
                        field.to_string()
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();
    Table::from_rows(rows, options.has_header)
}
