//! Budget-constrained text repacking

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::{Charset, PendingTranslations, StringRecord};
use crate::buffer::ByteBuffer;

/// Outcome of a repack. Entries fail independently; a rejected or unmatched
/// entry never prevents its siblings from being applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepackReport {
    pub applied: usize,
    pub rejected: usize,
    pub unmatched: usize,
    /// Offsets whose encoded text did not fit, could not be encoded, or whose
    /// slot lies outside the buffer
    pub rejected_offsets: Vec<usize>,
    /// Offsets with no string record in the current generation
    pub unmatched_offsets: Vec<usize>,
}

impl RepackReport {
    pub fn total(&self) -> usize {
        self.applied + self.rejected + self.unmatched
    }
}

/// Result of checking pending text against a record's byte budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetCheck {
    /// `None` when the text has characters the charset cannot represent
    pub encoded_len: Option<usize>,
    pub budget: usize,
    pub fits: bool,
}

pub fn check_budget(record: &StringRecord, text: &str, charset: Charset) -> BudgetCheck {
    let encoded_len = charset.encode(text).map(|bytes| bytes.len());
    BudgetCheck {
        encoded_len,
        budget: record.length,
        fits: encoded_len.is_some_and(|len| len <= record.length),
    }
}

/// Write every pending translation that fits its slot into a copy of `buffer`.
///
/// Only records from `buffer`'s generation are considered. Applied slots are
/// zero-filled past the encoded text. The input buffer is left untouched; when
/// nothing applies the returned buffer is the same snapshot.
pub fn repack(
    buffer: &ByteBuffer,
    records: &[StringRecord],
    translations: &PendingTranslations,
    charset: Charset,
) -> (ByteBuffer, RepackReport) {
    let by_offset: HashMap<usize, &StringRecord> = records
        .iter()
        .filter(|record| record.generation == buffer.generation())
        .map(|record| (record.offset, record))
        .collect();

    let mut report = RepackReport::default();
    let mut patched: Option<Vec<u8>> = None;

    for (offset, text) in translations.iter() {
        let Some(record) = by_offset.get(&offset) else {
            trace!("No string record at 0x{:X}, skipping", offset);
            report.unmatched += 1;
            report.unmatched_offsets.push(offset);
            continue;
        };

        let encoded = match charset.encode(text) {
            Some(bytes) if bytes.len() <= record.length => bytes,
            other => {
                debug!(
                    "Rejected translation at 0x{:X}: {} bytes for a {}-byte slot",
                    offset,
                    other.map_or_else(|| "unencodable".to_string(), |b| b.len().to_string()),
                    record.length
                );
                report.rejected += 1;
                report.rejected_offsets.push(offset);
                continue;
            }
        };

        let bytes = patched.get_or_insert_with(|| buffer.to_vec());
        let Some(slot) = bytes.get_mut(record.range()) else {
            debug!(
                "Rejected translation at 0x{:X}: slot ends past the buffer",
                offset
            );
            report.rejected += 1;
            report.rejected_offsets.push(offset);
            continue;
        };
        slot[..encoded.len()].copy_from_slice(&encoded);
        slot[encoded.len()..].fill(0);
        report.applied += 1;
    }

    info!(
        "Repack ({}): {} applied, {} rejected, {} unmatched",
        charset, report.applied, report.rejected, report.unmatched
    );

    let output = match patched {
        Some(bytes) if report.applied > 0 => buffer.publish(bytes),
        _ => buffer.clone(),
    };
    (output, report)
}
