//! Quoting-aware reader built on the `csv` crate.
//!
//! Every entry point funnels through [`for_each_row`], a single read loop
//! that reports each parsed row to an optional [`RowObserver`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::{Result, TableError, UnterminatedQuote};
use crate::observer::{NoopObserver, RowObserver};
use crate::readers::quotes::QuoteTracker;
use crate::readers::{ReadOptions, ReadOptionsBuilder};
use crate::table::Table;

pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a delimited file into a [`Table`].
pub fn read_file(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Table> {
    read_file_with(path, options, &mut NoopObserver)
}

/// [`read_file`], reporting every row to `observer`.
pub fn read_file_with(
    path: impl AsRef<Path>,
    options: &ReadOptions,
    observer: &mut dyn RowObserver,
) -> Result<Table> {
    let mut tbl = Table::new();
    for_each_row(path.as_ref(), options, observer, |index, row| {
        if index == 0 && options.has_header {
            tbl.columns = row;
        } else {
            tbl.records.push(row);
        }
        Ok(())
    })?;
    Ok(tbl)
}

/// Parse in-memory delimited data; leading whitespace of fields is dropped.
pub fn parse_bytes(data: &[u8], delimiter: char, has_header: bool) -> Result<Table> {
    parse_reader(data, delimiter, has_header)
}

/// Parse delimited data from any reader; leading whitespace of fields is
/// dropped.
pub fn parse_reader<R: Read>(reader: R, delimiter: char, has_header: bool) -> Result<Table> {
    let options = ReadOptionsBuilder::new()
        .with_delimiter(delimiter)
        .with_header(has_header)
        .with_trim_leading_space(true)
        .build();
    let source = Path::new("<reader>");
    let mut rows = Vec::new();
    decode_rows(reader, source, &options, &mut NoopObserver, |_, row| {
        rows.push(row);
        Ok(())
    })?;
    Ok(Table::from_rows(rows, has_header))
}

/// Open `path`, optionally skip its byte-order mark, and hand every parsed
/// row with its zero-based index to `on_row`.
///
/// Input that ends inside a quoted field fails with [`TableError::Decode`]
/// after its last row was handed out. The file handle is dropped on every
/// exit path, including errors raised by `on_row`.
pub fn for_each_row<F>(
    path: &Path,
    options: &ReadOptions,
    observer: &mut dyn RowObserver,
    on_row: F,
) -> Result<usize>
where
    F: FnMut(usize, Vec<String>) -> Result<()>,
{
    options.delimiter_byte()?;
    let file = File::open(path).map_err(|source| TableError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    if options.strip_bom {
        skip_bom(&mut reader).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    }
    decode_rows(reader, path, options, observer, on_row)
}

fn skip_bom<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    let buf = reader.fill_buf()?;
    if buf.starts_with(UTF8_BOM) {
        reader.consume(UTF8_BOM.len());
    }
    Ok(())
}

fn decode_rows<R, F>(
    reader: R,
    path: &Path,
    options: &ReadOptions,
    observer: &mut dyn RowObserver,
    mut on_row: F,
) -> Result<usize>
where
    R: Read,
    F: FnMut(usize, Vec<String>) -> Result<()>,
{
    let delimiter = options.delimiter_byte()?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(QuoteTracker::new(reader, delimiter));

    observer.on_file_start(path);
    let mut count = 0;
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| decode_error(path, e))?;
        let row: Vec<String> = record
            .iter()
            .map(|field| {
                if options.trim_leading_space {
                    field.trim_start().to_string()
                } else {
                    field.to_string()
                }
            })
            .collect();
        observer.on_row(path, index, &row);
        on_row(index, row)?;
        count = index + 1;
    }
    if let Some(byte) = csv_reader.get_ref().open_quote() {
        return Err(TableError::Decode {
            path: path.to_path_buf(),
            record: Some(count.saturating_sub(1) as u64),
            source: Box::new(UnterminatedQuote { byte }),
        });
    }
    observer.on_file_end(path, count);
    Ok(count)
}

fn decode_error(path: &Path, err: csv::Error) -> TableError {
    let record = err.position().map(|p| p.record());
    if err.is_io_error() {
        return TableError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::from(err),
        };
    }
    TableError::Decode {
        path: path.to_path_buf(),
        record,
        source: Box::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_with_header() {
        let tbl = parse_bytes(b"id,name\n1,Alice\n2,Bob\n", ',', true).unwrap();
        assert_eq!(tbl.columns(), &["id", "name"]);
        assert_eq!(tbl.records(), &[vec!["1", "Alice"], vec!["2", "Bob"]]);
    }

    #[test]
    fn test_parse_bytes_quoted_fields() {
        let data = b"id,comment\n1,\"hello, world\"\n2,\"multi\nline\"\n3,\"say \"\"hi\"\"\"\n";
        let tbl = parse_bytes(data, ',', true).unwrap();
        assert_eq!(tbl.len(), 3);
        assert_eq!(tbl.records()[0][1], "hello, world");
        assert_eq!(tbl.records()[1][1], "multi\nline");
        assert_eq!(tbl.records()[2][1], "say \"hi\"");
    }

    #[test]
    fn test_parse_bytes_trims_leading_space() {
        let tbl = parse_bytes(b"a;  b\n1;  2 \n", ';', true).unwrap();
        assert_eq!(tbl.columns(), &["a", "b"]);
        assert_eq!(tbl.records(), &[vec!["1", "2 "]]);
    }

    #[test]
    fn test_parse_bytes_ragged_rows() {
        let tbl = parse_bytes(b"a,b,c\n1\n1,2,3,4\n", ',', true).unwrap();
        assert_eq!(tbl.records()[0], vec!["1"]);
        assert_eq!(tbl.records()[1].len(), 4);
    }

    #[test]
    fn test_parse_bytes_without_header() {
        let tbl = parse_bytes(b"1,2\n3,4\n", ',', false).unwrap();
        assert!(tbl.columns().is_empty());
        assert_eq!(tbl.len(), 2);
    }

    #[test]
    fn test_parse_invalid_utf8_is_decode_error() {
        let err = parse_bytes(b"a,b\n1,\xff\xfe\n", ',', true).unwrap_err();
        match err {
            TableError::Decode { record, .. } => assert_eq!(record, Some(1)),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quote_is_decode_error() {
        let err = parse_bytes(b"id,name\n1,\"Alice\n2,Bob\n", ',', true).unwrap_err();
        match err {
            TableError::Decode { record, source, .. } => {
                assert_eq!(record, Some(1));
                assert!(source.to_string().contains("byte 10"));
            }
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quote_on_last_line() {
        let err = parse_bytes(b"a,b\n1,2\n3,\"4", ',', true).unwrap_err();
        assert!(matches!(err, TableError::Decode { record: Some(2), .. }));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = parse_bytes(b"a", '│', true).unwrap_err();
        assert!(matches!(err, TableError::InvalidDelimiter('│')));
    }

    #[test]
    fn test_skip_bom() {
        let mut reader = BufReader::new(&b"\xEF\xBB\xBFid"[..]);
        skip_bom(&mut reader).unwrap();
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "id");

        let mut reader = BufReader::new(&b"id"[..]);
        skip_bom(&mut reader).unwrap();
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "id");
    }
}
