//! The command line handed to the bootstrap tool.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::DeployConfig;

/// Flag naming the deployment working folder.
pub const FOLDER_FLAG: &str = "-b";
/// Option prefix naming the manifest file.
pub const BOOTSTRAP_FILE_OPTION: &str = "--bootstrap-file=";
/// Flag requesting fail-fast behavior from the bootstrap tool.
pub const BREAK_ON_FIRST_ERROR_FLAG: &str = "--break-on-first-error";

/// A fully resolved bootstrap command: interpreter plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl BootstrapInvocation {
    /// Build the command line for `interpreter` from `config`.
    ///
    /// Argument order is fixed: script, `-b <folder>`,
    /// `--bootstrap-file=<manifest>`, then the optional fail-fast flag.
    pub fn new(interpreter: PathBuf, config: &DeployConfig) -> Self {
        let mut bootstrap_file = OsString::from(BOOTSTRAP_FILE_OPTION);
        bootstrap_file.push(config.manifest_path());

        let mut args = vec![
            config.script_path().into_os_string(),
            OsString::from(FOLDER_FLAG),
            config.folder.clone().into_os_string(),
            bootstrap_file,
        ];
        if config.break_on_first_error {
            args.push(OsString::from(BREAK_ON_FIRST_ERROR_FLAG));
        }

        Self { program: interpreter, args }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by arguments, as lossy UTF-8 strings.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|part| part.to_string_lossy().into_owned())
            .collect()
    }

    /// Single-line rendering with POSIX shell quoting where needed.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serializable view for machine-readable output.
    pub fn plan(&self, cwd: &Path) -> InvocationPlan {
        let mut argv = self.argv();
        let program = argv.remove(0);
        InvocationPlan { program, args: argv, cwd: cwd.to_string_lossy().into_owned() }
    }
}

/// JSON shape of a planned invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationPlan {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: String,
}

fn shell_quote(part: &OsStr) -> String {
    let text = part.to_string_lossy();
    let safe = !text.is_empty()
        && text.chars().all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if safe { text.into_owned() } else { format!("'{}'", text.replace('\'', r"'\''")) }
}
