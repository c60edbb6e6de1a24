mod config;
pub mod csv_reader;
mod quotes;
pub mod simple;

pub use config::{ReadOptions, ReadOptionsBuilder};
pub use csv_reader::{for_each_row, parse_bytes, parse_reader, read_file, read_file_with};
pub use simple::{parse_simple, read_simple};
