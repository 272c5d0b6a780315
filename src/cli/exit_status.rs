use std::process::ExitCode;

/// Process exit status of an audit run.
///
/// - `Success` (0): every used key exists in every dictionary
/// - `Failure` (1): at least one dictionary is missing at least one used key
/// - `Error` (2): the audit could not run (bad config file, invalid root)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for an audit that found `missing_count` distinct missing keys.
    pub fn from_missing_count(missing_count: usize) -> Self {
        if missing_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
