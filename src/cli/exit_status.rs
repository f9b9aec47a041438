use std::process::ExitCode;

use crate::core::Outcome;

/// Process exit status of `i18ntag`.
///
/// `0` when the command did what was asked, `1` when the generator or the
/// schema file let it down (already reported to the user), `2` when the
/// command could not run at all (bad arguments, config, I/O).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// `Success` if `ok`, `Failure` otherwise.
    pub fn success_if(ok: bool) -> Self {
        if ok { Self::Success } else { Self::Failure }
    }
}

impl From<&Outcome> for ExitStatus {
    fn from(outcome: &Outcome) -> Self {
        Self::success_if(outcome.is_success())
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
