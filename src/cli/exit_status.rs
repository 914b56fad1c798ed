use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): dependencies were printed (possibly none)
/// - `Error` (1): the file or config could not be read, or a detective failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
