use std::fmt::{self, Display};
use std::process::ExitStatus;

use crate::domain::ExitStatusPolicy;

/// Exit code used when the child's status carries neither a code nor a signal.
const UNKNOWN_STATUS_CODE: i32 = 1;

/// Offset shells add to a terminating signal number.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Captured outcome of the bootstrap child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ChildExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code), signal: None }
    }

    pub fn from_signal(signal: i32) -> Self {
        Self { code: None, signal: Some(signal) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Status code a shell would report for this outcome.
    pub fn status_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => SIGNAL_EXIT_BASE + signal,
            (None, None) => UNKNOWN_STATUS_CODE,
        }
    }

    /// Exit code the trigger reports under `policy`.
    pub fn exit_code(&self, policy: ExitStatusPolicy) -> i32 {
        match policy {
            ExitStatusPolicy::Propagate => self.status_code(),
            ExitStatusPolicy::Ignore => 0,
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self { code: status.code(), signal }
    }
}

impl Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {}", code),
            (None, Some(signal)) => write!(f, "terminated by signal {}", signal),
            (None, None) => write!(f, "unknown exit status"),
        }
    }
}
