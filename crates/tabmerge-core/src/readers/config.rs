use crate::errors::{Result, TableError};

/// How delimited files are split into rows and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: char,
    /// First line is the header row
    pub has_header: bool,
    /// Trim surrounding whitespace from lines and fields (simple reader)
    pub trim_space: bool,
    /// Drop a leading UTF-8 byte-order mark (quoting-aware reader)
    pub strip_bom: bool,
    /// Drop leading whitespace of each field (quoting-aware reader)
    pub trim_leading_space: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            trim_space: false,
            strip_bom: false,
            trim_leading_space: false,
        }
    }
}

impl ReadOptions {
    /// The delimiter as the single byte the CSV decoder needs.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(TableError::InvalidDelimiter(self.delimiter))
        }
    }
}

pub struct ReadOptionsBuilder {
    delimiter: char,
    has_header: bool,
    trim_space: bool,
    strip_bom: bool,
    trim_leading_space: bool,
}

impl Default for ReadOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadOptionsBuilder {
    /// Create a new [`ReadOptionsBuilder`]
    pub fn new() -> Self {
        let options = ReadOptions::default();
        Self {
            delimiter: options.delimiter,
            has_header: options.has_header,
            trim_space: options.trim_space,
            strip_bom: options.strip_bom,
            trim_leading_space: options.trim_leading_space,
        }
    }

    /// Build a [`ReadOptions`]
    pub fn build(self) -> ReadOptions {
        ReadOptions {
            delimiter: self.delimiter,
            has_header: self.has_header,
            trim_space: self.trim_space,
            strip_bom: self.strip_bom,
            trim_leading_space: self.trim_leading_space,
        }
    }

    pub fn with_delimiter(self, delimiter: char) -> Self {
        Self { delimiter, ..self }
    }

    pub fn with_header(self, has_header: bool) -> Self {
        Self { has_header, ..self }
    }

    pub fn with_trim_space(self, trim: bool) -> Self {
        Self {
            trim_space: trim,
            ..self
        }
    }

    pub fn with_strip_bom(self, strip: bool) -> Self {
        Self {
            strip_bom: strip,
            ..self
        }
    }

    pub fn with_trim_leading_space(self, trim: bool) -> Self {
        Self {
            trim_leading_space: trim,
            ..self
        }
    }
}
