use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::InterpreterLocator;

/// Interpreter names searched for, in order, when none is configured.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Resolves the interpreter from configuration or the executable search path.
#[derive(Debug, Clone, Default)]
pub struct SystemInterpreterLocator {
    configured: Option<PathBuf>,
    search_path: Option<OsString>,
}

impl SystemInterpreterLocator {
    pub fn new(configured: Option<PathBuf>) -> Self {
        Self { configured, search_path: None }
    }

    /// Search `search_path` (a `PATH`-style list) instead of the process `PATH`.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    fn find(&self, candidate: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(candidate, Some(paths), cwd).ok()
            }
            None => which::which(candidate).ok(),
        }
    }
}

impl InterpreterLocator for SystemInterpreterLocator {
    fn locate(&self) -> Result<PathBuf, AppError> {
        if let Some(path) = &self.configured {
            debug!(interpreter = %path.display(), "using configured interpreter");
            return Ok(path.clone());
        }

        for candidate in INTERPRETER_CANDIDATES {
            if let Some(path) = self.find(candidate) {
                debug!(interpreter = %path.display(), "resolved interpreter from PATH");
                return Ok(path);
            }
        }

        Err(AppError::InterpreterNotFound {
            candidates: INTERPRETER_CANDIDATES.iter().map(|c| c.to_string()).collect(),
        })
    }
}
