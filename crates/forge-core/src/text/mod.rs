//! Text extraction and repacking.
//!
//! - **Scanner**: printable-run extraction into [`StringRecord`]s
//! - **Translations**: pending edits keyed by offset
//! - **Patcher**: writes edits back within each record's byte budget
//! - **Search**: operator-side filtering of scanned strings

mod charset;
mod patcher;
mod scanner;
mod search;
mod translations;

use serde::{Deserialize, Serialize};

use crate::buffer::layout::text::{DEFAULT_CHARSET, DEFAULT_MIN_LENGTH};

pub use charset::Charset;
pub use patcher::{BudgetCheck, RepackReport, check_budget, repack};
pub use scanner::{StringRecord, StringScanner, is_printable, printable_runs, scan_strings};
pub use search::filter_strings;
pub use translations::PendingTranslations;

/// Text scanning and export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Minimum run length in bytes
    pub min_length: usize,
    /// Charset label used to decode runs
    pub charset: String,
    /// Charset label used to encode replacement text
    pub export_charset: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            charset: DEFAULT_CHARSET.to_string(),
            export_charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_options_partial_json_uses_defaults() {
        let options: TextOptions = serde_json::from_str(r#"{"charset": "shift_jis"}"#).unwrap();
        assert_eq!(options.min_length, 4);
        assert_eq!(options.charset, "shift_jis");
        assert_eq!(options.export_charset, "utf-8");
    }
}
