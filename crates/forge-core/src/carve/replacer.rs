//! Fixed-slot sub-file replacement.
//!
//! Replacement is two-phase. [`propose_replace`] validates the request and
//! describes what a write would do; [`commit_replace`] performs it. An oversize
//! proposal only commits with [`Confirmation::Confirmed`], and even then writes
//! no more than the slot holds. The buffer length never changes.

use serde::Serialize;
use tracing::{info, warn};

use super::CarvedRecord;
use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};

/// Operator answer to an oversize warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Replacement data is larger than the slot; committing would drop the excess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversizeWarning {
    pub display_name: String,
    pub offset: usize,
    pub slot: usize,
    pub provided: usize,
}

impl OversizeWarning {
    /// Bytes that would not be written
    pub fn excess(&self) -> usize {
        self.provided - self.slot
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceProposal {
    record: CarvedRecord,
    slot: usize,
    data: Vec<u8>,
    warning: Option<OversizeWarning>,
}

impl ReplaceProposal {
    pub fn record(&self) -> &CarvedRecord {
        &self.record
    }

    pub fn warning(&self) -> Option<&OversizeWarning> {
        self.warning.as_ref()
    }

    pub fn needs_confirmation(&self) -> bool {
        self.warning.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplaceOutcome {
    pub written: usize,
    pub zero_filled: usize,
    /// Bytes of the replacement dropped by a confirmed oversize write
    pub truncated: usize,
}

/// Validate a replacement of `record`'s slot with `data`.
///
/// Fails with [`Error::UnknownSlotSize`] when the record has no known size.
pub fn propose_replace(
    buffer: &ByteBuffer,
    record: &CarvedRecord,
    data: Vec<u8>,
) -> Result<ReplaceProposal> {
    buffer.ensure_generation(record.generation)?;
    let slot = record.size.known().ok_or(Error::UnknownSlotSize {
        id: record.id,
        offset: record.offset,
    })?;
    buffer.checked_range(record.offset, slot)?;

    let warning = (data.len() > slot).then(|| OversizeWarning {
        display_name: record.display_name.clone(),
        offset: record.offset,
        slot,
        provided: data.len(),
    });
    if let Some(warning) = &warning {
        warn!(
            "Replacement for {} is {} bytes larger than its {}-byte slot",
            warning.display_name,
            warning.excess(),
            slot
        );
    }

    Ok(ReplaceProposal {
        record: record.clone(),
        slot,
        data,
        warning,
    })
}

/// Apply a proposal, producing the next buffer generation.
///
/// An oversize proposal without [`Confirmation::Confirmed`] fails with
/// [`Error::OversizeWrite`] and leaves `buffer` as it was.
pub fn commit_replace(
    buffer: &ByteBuffer,
    proposal: ReplaceProposal,
    confirmation: Confirmation,
) -> Result<(ByteBuffer, ReplaceOutcome)> {
    buffer.ensure_generation(proposal.record.generation)?;
    if let Some(warning) = &proposal.warning {
        if confirmation != Confirmation::Confirmed {
            return Err(Error::OversizeWrite {
                offset: warning.offset,
                slot: warning.slot,
                provided: warning.provided,
            });
        }
    }

    let range = buffer.checked_range(proposal.record.offset, proposal.slot)?;
    let written = proposal.data.len().min(proposal.slot);
    let mut bytes = buffer.to_vec();
    let slot = &mut bytes[range];
    slot[..written].copy_from_slice(&proposal.data[..written]);
    slot[written..].fill(0);

    let outcome = ReplaceOutcome {
        written,
        zero_filled: proposal.slot - written,
        truncated: proposal.data.len() - written,
    };
    info!(
        "Replaced {} at 0x{:X}: {} bytes written, {} zero-filled, {} truncated",
        proposal.record.display_name,
        proposal.record.offset,
        outcome.written,
        outcome.zero_filled,
        outcome.truncated
    );
    Ok((buffer.publish(bytes), outcome))
}

/// [`propose_replace`] followed by [`commit_replace`]
pub fn replace(
    buffer: &ByteBuffer,
    record: &CarvedRecord,
    data: Vec<u8>,
    confirmation: Confirmation,
) -> Result<(ByteBuffer, ReplaceOutcome)> {
    let proposal = propose_replace(buffer, record, data)?;
    commit_replace(buffer, proposal, confirmation)
}
