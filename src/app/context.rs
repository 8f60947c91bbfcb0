use crate::ports::{InterpreterLocator, ProcessRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: InterpreterLocator, R: ProcessRunner> {
    locator: L,
    runner: R,
}

impl<L: InterpreterLocator, R: ProcessRunner> AppContext<L, R> {
    /// Create a new application context.
    pub fn new(locator: L, runner: R) -> Self {
        Self { locator, runner }
    }

    /// Get a reference to the interpreter locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
