//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use forge_core::TextOptions;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Locate, extract and patch data inside opaque game asset files")]
#[command(version)]
pub struct Cli {
    /// Settings file (a missing file means built-in defaults)
    #[arg(short, long, global = true, default_value = "forge.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the `[text]` settings
#[derive(Args, Debug, Clone, Default)]
pub struct TextArgs {
    /// Minimum string length in bytes
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Charset used to decode strings (e.g. utf-8, shift_jis, windows-1252)
    #[arg(long)]
    pub charset: Option<String>,

    /// Charset used to encode translations when repacking
    #[arg(long)]
    pub export_charset: Option<String>,
}

impl TextArgs {
    pub fn apply(&self, mut options: TextOptions) -> TextOptions {
        if let Some(min_len) = self.min_len {
            options.min_length = min_len;
        }
        if let Some(ref charset) = self.charset {
            options.charset = charset.clone();
        }
        if let Some(ref export_charset) = self.export_charset {
            options.export_charset = export_charset.clone();
        }
        options
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List printable strings
    Strings {
        file: PathBuf,

        #[command(flatten)]
        text: TextArgs,

        /// Only show strings containing this text (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List embedded sub-files found by signature
    Carve {
        file: PathBuf,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write one carved sub-file to disk as File_{id}.{ext}
    Extract {
        file: PathBuf,

        /// Record id as listed by `carve`
        id: usize,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Overwrite one carved sub-file in place and write MODDED_{name}
    Replace {
        file: PathBuf,

        /// Record id as listed by `carve`
        id: usize,

        /// File holding the new content
        replacement: PathBuf,

        /// Accept oversize replacements without asking (excess bytes are dropped)
        #[arg(short, long)]
        yes: bool,

        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the translation memory document for the scanned strings
    Memory {
        file: PathBuf,

        #[command(flatten)]
        text: TextArgs,

        /// Output path (default: {name}_translation.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a translation memory document and write MODDED_{name}
    Repack {
        file: PathBuf,

        /// Translation memory document
        memory: PathBuf,

        #[command(flatten)]
        text: TextArgs,

        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show raw bytes in hexdump format
    Hexdump {
        file: PathBuf,

        /// Start offset (hex, with or without 0x prefix)
        #[arg(long, default_value = "0", value_parser = parse_offset)]
        offset: usize,

        /// Number of bytes to show
        #[arg(long, default_value_t = 512)]
        size: usize,
    },
}

/// Parse a file offset given in hex, with or without a `0x` prefix
fn parse_offset(s: &str) -> Result<usize, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    usize::from_str_radix(digits, 16).map_err(|e| format!("invalid file offset {s:?}: {e}"))
}
