//! Core audit engine.
//!
//! The audit runs as a straight pipeline:
//!
//! 1. **Load**: `parsers::json` reads every language dictionary
//! 2. **Scan**: `file_scanner` walks the project and `extract` pulls keys out of each file
//! 3. **Compare**: `compare` diffs the used keys against each dictionary
//!
//! ## Module Structure
//!
//! - `data`: Dictionary and used-key types
//! - `parsers`: Dictionary file loader
//! - `file_scanner`: Project walk with exclusion rules
//! - `extract`: Key-referencing patterns
//! - `compare`: Missing/extra key computation

pub mod compare;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use compare::{ComparisonResult, collect_missing, compare_keys, compare_language};
pub use data::*;
