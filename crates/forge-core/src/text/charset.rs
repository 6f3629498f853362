use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};

/// A resolved text encoding.
///
/// Labels are resolved with the WHATWG rules (`utf-8`, `shift_jis`, `windows-1252`, ...).
/// The `replacement` pseudo-encoding is refused since it decodes everything to U+FFFD.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    pub fn from_label(label: &str) -> Result<Self> {
        Encoding::for_label_no_replacement(label.trim().as_bytes())
            .map(Self)
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
    }

    /// Resolve a label for writing text back into the buffer.
    ///
    /// encoding_rs encodes UTF-16 as UTF-8, which would silently change the byte
    /// layout of a slot, so encodings without their own encoder are refused.
    pub fn for_export(label: &str) -> Result<Self> {
        let charset = Self::from_label(label)?;
        if charset.0.output_encoding() != charset.0 {
            return Err(Error::UnsupportedEncoding(format!(
                "{} cannot be used to encode replacement text",
                charset.name()
            )));
        }
        Ok(charset)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Strict decode: `None` on malformed input or if the text holds U+FFFD.
    ///
    /// A leading byte order mark for this charset is dropped from the text.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let bytes = match Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) if encoding == self.0 => &bytes[bom_len..],
            _ => bytes,
        };
        let text = self
            .0
            .decode_without_bom_handling_and_without_replacement(bytes)?;
        if text.contains(char::REPLACEMENT_CHARACTER) {
            return None;
        }
        Some(text.into_owned())
    }

    /// Strict encode: `None` if some character is unmappable in this charset
    pub fn encode<'a>(&self, text: &'a str) -> Option<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors { None } else { Some(bytes) }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Charset({})", self.name())
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}
