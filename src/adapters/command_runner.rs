use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, BootstrapInvocation, ChildExit};
use crate::ports::ProcessRunner;

/// Runs the bootstrap command as a real child process.
///
/// The child inherits stdin, stdout and stderr, so whatever the bootstrap
/// tool prints reaches the user unfiltered.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, invocation: &BootstrapInvocation, cwd: &Path) -> Result<ChildExit, AppError> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args());
        command.current_dir(cwd);

        let status = command.status().map_err(|source| AppError::Spawn {
            program: invocation.program().to_path_buf(),
            source,
        })?;

        Ok(ChildExit::from(status))
    }
}
