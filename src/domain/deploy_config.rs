//! Deployment configuration domain models.

use std::path::PathBuf;

use serde::Deserialize;

/// Deployment working folder, relative to the working directory.
pub const DEFAULT_FOLDER: &str = "deps";

/// Bootstrap script file name inside the deployment folder.
pub const DEFAULT_SCRIPT: &str = "bootstrap.py";

/// Bootstrap manifest file name inside the deployment folder.
pub const DEFAULT_MANIFEST: &str = "bootstrap.json";

/// How the bootstrap tool's exit status maps onto the trigger's own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStatusPolicy {
    /// Exit with the bootstrap tool's status.
    #[default]
    Propagate,
    /// Always exit successfully once the tool has finished.
    Ignore,
}

/// Settings for a single bootstrap deployment, loaded from the `[deploy]`
/// table of `deploy-deps.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Ask the bootstrap tool to halt on its first internal failure.
    #[serde(default = "default_true")]
    pub break_on_first_error: bool,
    #[serde(default)]
    pub exit_status: ExitStatusPolicy,
    /// Explicit interpreter executable; resolved from the search path when absent.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            script: default_script(),
            manifest: default_manifest(),
            break_on_first_error: default_true(),
            exit_status: ExitStatusPolicy::default(),
            interpreter: None,
        }
    }
}

impl DeployConfig {
    /// `<folder>/<script>`
    pub fn script_path(&self) -> PathBuf {
        self.folder.join(&self.script)
    }

    /// `<folder>/<manifest>`
    pub fn manifest_path(&self) -> PathBuf {
        self.folder.join(&self.manifest)
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from(DEFAULT_FOLDER)
}

fn default_script() -> String {
    DEFAULT_SCRIPT.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

fn default_true() -> bool {
    true
}
