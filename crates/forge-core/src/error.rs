use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Sub-file {id} at offset {offset:#x} has no known size, refusing to write")]
    UnknownSlotSize { id: usize, offset: usize },

    #[error(
        "Replacement of {provided} bytes exceeds the {slot}-byte slot at offset {offset:#x}; confirmation required"
    )]
    OversizeWrite {
        offset: usize,
        slot: usize,
        provided: usize,
    },

    #[error("Record from generation {record} does not match buffer generation {buffer}, rescan first")]
    StaleRecord { record: u64, buffer: u64 },

    #[error("Region {offset:#x}+{len} is outside the {buffer_len}-byte buffer")]
    OutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("Malformed translation document: {0}")]
    MalformedDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Oversize writes can be retried with an explicit confirmation
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::OversizeWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_only_oversize_is_recoverable() {
        let oversize = Error::OversizeWrite {
            offset: 0x10,
            slot: 10,
            provided: 12,
        };
        assert!(oversize.is_recoverable());
        assert!(!Error::UnknownSlotSize { id: 0, offset: 0 }.is_recoverable());
        assert!(!Error::UnsupportedEncoding("klingon".to_string()).is_recoverable());
    }

    #[test]
    fn test_oversize_message_mentions_sizes() {
        let err = Error::OversizeWrite {
            offset: 0x20,
            slot: 10,
            provided: 12,
        };
        let message = err.to_string();
        assert!(message.contains("12 bytes"));
        assert!(message.contains("10-byte"));
        assert!(message.contains("0x20"));
    }
}
