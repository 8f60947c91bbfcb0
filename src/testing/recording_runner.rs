use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, BootstrapInvocation, ChildExit};
use crate::ports::ProcessRunner;

/// Runner that records invocations instead of spawning them.
pub struct RecordingProcessRunner {
    pub runs: Mutex<Vec<(BootstrapInvocation, PathBuf)>>,
    pub exit: ChildExit,
    pub fail_to_spawn: bool,
}

impl RecordingProcessRunner {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            runs: Mutex::new(Vec::new()),
            exit: ChildExit::from_code(code),
            fail_to_spawn: false,
        }
    }

    pub fn unspawnable() -> Self {
        Self { fail_to_spawn: true, ..Self::exiting_with(0) }
    }

    pub fn runs(&self) -> Vec<(BootstrapInvocation, PathBuf)> {
        self.runs.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, invocation: &BootstrapInvocation, cwd: &Path) -> Result<ChildExit, AppError> {
        self.runs.lock().unwrap().push((invocation.clone(), cwd.to_path_buf()));
        if self.fail_to_spawn {
            return Err(AppError::Spawn {
                program: invocation.program().to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        }
        Ok(self.exit)
    }
}
