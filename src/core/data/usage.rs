use std::collections::HashSet;

/// Every distinct key referenced in the scanned sources.
///
/// Occurrence counts and originating files are not tracked.
pub type UsedKeySet = HashSet<String>;

/// Result of scanning the project tree for key usages.
#[derive(Debug, Default)]
pub struct UsageScan {
    pub keys: UsedKeySet,
    /// Number of source files that were read and searched.
    pub files_scanned: usize,
    /// Entries that could not be visited or read.
    pub skipped_count: usize,
}
