use serde::Serialize;
use tracing::warn;

use super::{CarvedRecord, SlotSize};
use crate::buffer::ByteBuffer;
use crate::buffer::layout::extract::UNKNOWN_SIZE_CAP;
use crate::error::Result;

/// Raised when a region of unknown size was cut at a fixed cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationAdvisory {
    pub cap: usize,
    pub returned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Set when `bytes` is a best-effort approximation of the region
    pub advisory: Option<TruncationAdvisory>,
}

impl Extraction {
    pub fn is_approximate(&self) -> bool {
        self.advisory.is_some()
    }
}

/// Copy a carved region out of `buffer`.
///
/// Known sizes give the exact slot. Unknown sizes give up to 5 MiB from the
/// record's offset, flagged with a [`TruncationAdvisory`].
pub fn extract(buffer: &ByteBuffer, record: &CarvedRecord) -> Result<Extraction> {
    buffer.ensure_generation(record.generation)?;

    let (bytes, advisory) = match record.size {
        SlotSize::Known(size) => (buffer.region(record.offset, size)?.to_vec(), None),
        SlotSize::Unknown => {
            let len = UNKNOWN_SIZE_CAP.min(buffer.len().saturating_sub(record.offset));
            let bytes = buffer.region(record.offset, len)?.to_vec();
            warn!(
                "{} has no known size; extracted {} bytes from 0x{:X} as an approximation",
                record.display_name, len, record.offset
            );
            (
                bytes,
                Some(TruncationAdvisory {
                    cap: UNKNOWN_SIZE_CAP,
                    returned: len,
                }),
            )
        }
    };

    Ok(Extraction {
        file_name: record.display_name.clone(),
        bytes,
        advisory,
    })
}
