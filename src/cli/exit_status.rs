use std::process::ExitCode;

/// Exit status of a depdiff run.
///
/// - `Success` (0): every source was processed (differences are reported, not fatal)
/// - `Failure` (1): a structured source could not be read or parsed, or
///   differences were found with `--fail-on-diff`
/// - `Error` (2): the run could not start or the text source is unreadable
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
