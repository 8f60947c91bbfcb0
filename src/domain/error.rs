use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for deploy-deps operations.
///
/// Failures of the bootstrap tool itself are not errors here: they are
/// reported as a [`ChildExit`](crate::domain::ChildExit) and propagated as
/// the process exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// No interpreter could be resolved to run the bootstrap script.
    #[error("No interpreter found on PATH (tried: {})", .candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    /// The interpreter process could not be started at all.
    #[error("Failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Coarse `io::ErrorKind` classification of this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Spawn { source, .. } => source.kind(),
            AppError::TomlParseError(_) | AppError::Serialization(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::ConfigMissing(_) | AppError::InterpreterNotFound { .. } => {
                io::ErrorKind::NotFound
            }
        }
    }
}
