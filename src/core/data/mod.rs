//! Data types shared by the loader, scanner and comparator.
//!
//! ## Module Structure
//!
//! - `message`: Dictionary types (LanguageDictionary, MessageValue)
//! - `usage`: Used-key types (UsedKeySet, UsageScan)

pub mod message;
pub mod usage;

pub use message::{AllDictionaries, LanguageDictionary, MessageValue};
pub use usage::{UsageScan, UsedKeySet};
