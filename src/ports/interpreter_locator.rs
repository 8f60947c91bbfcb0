use std::path::PathBuf;

use crate::domain::AppError;

/// Port for resolving the interpreter that runs the bootstrap script.
pub trait InterpreterLocator {
    /// Resolve the interpreter executable.
    ///
    /// The returned path is used verbatim as the child's program.
    fn locate(&self) -> Result<PathBuf, AppError>;
}
