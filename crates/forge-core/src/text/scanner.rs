//! Printable-run string extraction

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Charset;
use crate::buffer::ByteBuffer;
use crate::buffer::layout::text::{PRINTABLE_MAX, PRINTABLE_MIN};
use crate::error::Result;

/// A decoded printable run.
///
/// `length` is the byte length of the original run and the hard budget for any
/// replacement written at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: usize,
    pub offset: usize,
    pub length: usize,
    pub original: String,
    pub generation: u64,
}

impl StringRecord {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Printable ASCII, or any byte with the high bit set (possible multi-byte text)
pub fn is_printable(byte: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte) || byte > 0x7F
}

/// Maximal runs of printable bytes, in ascending order
pub fn printable_runs(bytes: &[u8]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        let start = cursor + bytes[cursor..].iter().position(|&b| is_printable(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| !is_printable(b))
            .map_or(bytes.len(), |len| start + len);
        cursor = end;
        Some(start..end)
    })
}

#[derive(Debug, Clone, Copy)]
pub struct StringScanner {
    min_length: usize,
    charset: Charset,
}

impl StringScanner {
    /// Resolves `charset` up front so an unsupported label fails before any scanning
    pub fn new(min_length: usize, charset: &str) -> Result<Self> {
        Ok(Self::with_charset(min_length, Charset::from_label(charset)?))
    }

    pub fn with_charset(min_length: usize, charset: Charset) -> Self {
        Self {
            min_length,
            charset,
        }
    }

    pub fn scan(&self, buffer: &ByteBuffer) -> Vec<StringRecord> {
        let bytes = buffer.as_slice();
        let mut records = Vec::new();
        let mut discarded = 0usize;

        for run in printable_runs(bytes) {
            if run.len() < self.min_length {
                continue;
            }
            match self.charset.decode(&bytes[run.clone()]) {
                Some(original) => records.push(StringRecord {
                    id: records.len(),
                    offset: run.start,
                    length: run.len(),
                    original,
                    generation: buffer.generation(),
                }),
                None => discarded += 1,
            }
        }

        debug!(
            "String scan ({}, min {}): {} records, {} undecodable runs discarded",
            self.charset,
            self.min_length,
            records.len(),
            discarded
        );
        records
    }
}

/// Scan `buffer` for printable runs of at least `min_length` bytes decodable as `charset`
pub fn scan_strings(
    buffer: &ByteBuffer,
    min_length: usize,
    charset: &str,
) -> Result<Vec<StringRecord>> {
    Ok(StringScanner::new(min_length, charset)?.scan(buffer))
}
