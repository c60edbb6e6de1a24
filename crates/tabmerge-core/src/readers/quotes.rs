//! Quote tracking for the CSV decoder.
//!
//! The `csv` crate reads an unterminated quoted field through to end of
//! input and reports no error. [`QuoteTracker`] sits between the file and
//! the decoder, follows the same field grammar byte by byte, and remembers
//! where a quoted field was opened so the read loop can reject input that
//! ends inside one.

use std::io::{self, Read};

use crate::readers::csv_reader::UTF8_BOM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

pub(crate) struct QuoteTracker<R> {
    inner: R,
    delimiter: u8,
    state: State,
    offset: u64,
    opened_at: u64,
}

impl<R: Read> QuoteTracker<R> {
    pub(crate) fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            state: State::FieldStart,
            offset: 0,
            opened_at: 0,
        }
    }

    /// Byte offset of a quote that is still open.
    pub(crate) fn open_quote(&self) -> Option<u64> {
        (self.state == State::Quoted).then_some(self.opened_at)
    }

    fn feed(&mut self, byte: u8) {
        // A leading byte-order mark is not field content
        let in_bom = self.offset < UTF8_BOM.len() as u64
            && self.state == State::FieldStart
            && UTF8_BOM[self.offset as usize] == byte;
        if !in_bom {
            self.state = match (self.state, byte) {
                (State::Quoted, b'"') => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                (State::QuoteInQuoted, b'"') => State::Quoted,
                (_, b'\n' | b'\r') => State::FieldStart,
                (_, b) if b == self.delimiter => State::FieldStart,
                (State::FieldStart, b'"') => {
                    self.opened_at = self.offset;
                    State::Quoted
                }
                _ => State::Unquoted,
            };
        }
        self.offset += 1;
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            self.feed(byte);
        }
        Ok(n)
    }
}
