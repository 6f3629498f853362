//! Generation-tagged byte buffer.
//!
//! A [`ByteBuffer`] is an immutable snapshot of the loaded file. Cloning it is
//! cheap (the bytes live behind an `Arc`), so scans can hold their own copy while
//! a patch builds the next generation from it. Patches never mutate a published
//! buffer; they call [`ByteBuffer::publish`] with the rewritten bytes instead.

pub mod layout;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::{Error, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Arc<[u8]>,
    generation: u64,
}

impl ByteBuffer {
    /// Wrap freshly loaded bytes as generation 0. No format validation is done.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
            generation: 0,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Owned copy of the bytes to build the next generation from
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Publish rewritten bytes as the next generation.
    ///
    /// Patches only overwrite in place, so the length must not change.
    pub(crate) fn publish(&self, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), self.len(), "patch changed buffer length");
        Self {
            bytes: Arc::from(bytes),
            generation: self.generation + 1,
        }
    }

    /// Bounds-checked view of `[offset, offset + len)`
    pub fn region(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let range = self.checked_range(offset, len)?;
        Ok(&self.bytes[range])
    }

    pub(crate) fn checked_range(&self, offset: usize, len: usize) -> Result<Range<usize>> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len() => Ok(offset..end),
            _ => Err(Error::OutOfBounds {
                offset,
                len,
                buffer_len: self.len(),
            }),
        }
    }

    /// Fail with [`Error::StaleRecord`] unless `generation` is this buffer's
    pub(crate) fn ensure_generation(&self, generation: u64) -> Result<()> {
        if generation != self.generation {
            return Err(Error::StaleRecord {
                record: generation,
                buffer: self.generation,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_bumps_generation_and_keeps_old_snapshot() {
        let original = ByteBuffer::new(b"abcd".to_vec());
        let mut bytes = original.to_vec();
        bytes[0] = b'z';
        let next = original.publish(bytes);

        assert_eq!(original.generation(), 0);
        assert_eq!(next.generation(), 1);
        assert_eq!(original.as_slice(), b"abcd");
        assert_eq!(next.as_slice(), b"zbcd");
    }

    #[test]
    fn test_region_bounds() {
        let buffer = ByteBuffer::new(vec![1, 2, 3, 4]);
        assert_eq!(buffer.region(1, 2).unwrap(), &[2, 3]);
        assert_eq!(buffer.region(4, 0).unwrap(), &[] as &[u8]);
        assert!(matches!(
            buffer.region(3, 2),
            Err(Error::OutOfBounds { offset: 3, len: 2, buffer_len: 4 })
        ));
        assert!(buffer.region(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_ensure_generation() {
        let buffer = ByteBuffer::new(vec![0; 4]);
        assert!(buffer.ensure_generation(0).is_ok());
        assert!(matches!(
            buffer.ensure_generation(3),
            Err(Error::StaleRecord { record: 3, buffer: 0 })
        ));
    }
}
