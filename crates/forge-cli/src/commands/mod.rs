//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod carve;
pub mod extract;
pub mod hexdump;
pub mod memory;
pub mod repack;
pub mod replace;
pub mod strings;
