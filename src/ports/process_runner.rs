use std::path::Path;

use crate::domain::{AppError, BootstrapInvocation, ChildExit};

/// Port for executing the bootstrap command.
pub trait ProcessRunner {
    /// Run `invocation` in `cwd`, blocking until the child exits.
    ///
    /// Returns `Err` only when the child could not be started; a child that
    /// ran and failed is an `Ok` with a non-success [`ChildExit`].
    fn run(&self, invocation: &BootstrapInvocation, cwd: &Path) -> Result<ChildExit, AppError>;
}
