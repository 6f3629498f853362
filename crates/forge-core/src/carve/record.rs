use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetKind {
    Json,
    Image,
    Archive,
    Audio,
}

impl AssetKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// File extension used when the region is written out
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Image => "png",
            Self::Archive => "assets",
            Self::Audio => "ogg",
        }
    }
}

/// Byte extent of a carved region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSize {
    Known(usize),
    /// The region's end cannot be found without parsing its container
    Unknown,
}

impl SlotSize {
    pub fn known(self) -> Option<usize> {
        match self {
            Self::Known(size) => Some(size),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for SlotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(size) => write!(f, "{}", size),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarvedRecord {
    pub id: usize,
    pub offset: usize,
    pub size: SlotSize,
    pub kind: AssetKind,
    pub display_name: String,
    pub generation: u64,
}

impl CarvedRecord {
    pub fn new(id: usize, offset: usize, size: SlotSize, kind: AssetKind, generation: u64) -> Self {
        Self {
            id,
            offset,
            size,
            kind,
            display_name: format!("File_{}.{}", id, kind.extension()),
            generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_names_and_extensions() {
        assert_eq!(AssetKind::Json.to_string(), "json");
        assert_eq!(AssetKind::Archive.name(), "archive");
        assert_eq!(AssetKind::from_str("audio").unwrap(), AssetKind::Audio);
        assert_eq!(AssetKind::Image.extension(), "png");
        assert_eq!(AssetKind::Archive.extension(), "assets");
    }

    #[test]
    fn test_display_name() {
        let record = CarvedRecord::new(3, 0x40, SlotSize::Unknown, AssetKind::Audio, 0);
        assert_eq!(record.display_name, "File_3.ogg");
    }

    #[test]
    fn test_slot_size_serde() {
        let json = serde_json::to_string(&SlotSize::Known(7)).unwrap();
        assert_eq!(json, r#"{"known":7}"#);
        let json = serde_json::to_string(&SlotSize::Unknown).unwrap();
        assert_eq!(json, r#""unknown""#);
        assert_eq!(SlotSize::Known(7).to_string(), "7");
        assert_eq!(SlotSize::Unknown.known(), None);
    }
}
