//! `forge.toml` settings.
//!
//! ```toml
//! output_dir = "out"
//!
//! [text]
//! min_length = 4
//! charset = "shift_jis"
//! export_charset = "shift_jis"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use forge_core::TextOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub text: TextOptions,
    /// Directory for extracted and repacked files (default: current directory)
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[text]\ncharset = \"shift_jis\"\n").unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.text.charset, "shift_jis");
        assert_eq!(config.text.min_length, 4);
        assert_eq!(config.output_dir(), Path::new("."));
    }

    #[test]
    fn test_load_output_dir() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "output_dir = \"out\"\n").unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(config.text, TextOptions::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[text]\nmin_length = \"four\"\n").unwrap();
        assert!(Config::load(temp_file.path()).is_err());
    }
}
