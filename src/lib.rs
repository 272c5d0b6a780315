//! keyaudit - i18n key coverage auditor
//!
//! keyaudit scans a project's scripts and markup for translation-key usages
//! (`Lang.get('key')`, `getLang('key')`, `data-i18n="key"`, ...) and compares
//! them against per-language JSON dictionaries, reporting keys that are used
//! but missing from a dictionary and keys that are declared but never used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, orchestration, report)
//! - `config`: Configuration file loading and built-in ignore lists
//! - `core`: Dictionary loader, usage scanner and comparator

pub mod cli;
pub mod config;
pub mod core;
