//! File parsers for dictionary files.
//!
//! - `json`: JSON dictionary loader (scans the language directory)

pub mod json;
