//! Shared testing utilities for deploy-deps CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File the stand-in bootstrap script writes its arguments to.
pub const ARGS_FILE: &str = "bootstrap-args.txt";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the `deps/` folder in the work directory.
    pub fn deps_path(&self) -> PathBuf {
        self.work_dir().join("deps")
    }

    /// Build a command for invoking the compiled `deploy-deps` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("deploy-deps").expect("Failed to locate deploy-deps binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Install a `deps/bootstrap.py` stand-in run by `/bin/sh` that records
    /// its arguments and exits with `exit_code`.
    pub fn install_bootstrap(&self, exit_code: i32) {
        fs::create_dir_all(self.deps_path()).expect("Failed to create deps directory");
        let script = format!(
            "printf '%s\\n' \"$0\" \"$@\" > {}\necho bootstrap-ran\nexit {}\n",
            ARGS_FILE, exit_code
        );
        fs::write(self.deps_path().join("bootstrap.py"), script)
            .expect("Failed to write bootstrap script");
        fs::write(self.deps_path().join("bootstrap.json"), "{}\n")
            .expect("Failed to write bootstrap manifest");
    }

    /// Point the default config file at `/bin/sh`.
    pub fn use_shell_interpreter(&self) {
        self.write_config("[deploy]\ninterpreter = \"/bin/sh\"\n");
    }

    /// Write `deploy-deps.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir().join("deploy-deps.toml"), content)
            .expect("Failed to write config");
    }

    /// Directory used as the sole `PATH` entry in interpreter lookup tests.
    pub fn bin_dir(&self) -> PathBuf {
        self.work_dir().join("bin")
    }

    /// Install an executable `name` in [`Self::bin_dir`] that hands its
    /// arguments to `/bin/sh`, standing in for a Python interpreter.
    #[cfg(unix)]
    pub fn install_interpreter(&self, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        fs::create_dir_all(self.bin_dir()).expect("Failed to create bin directory");
        let path = self.bin_dir().join(name);
        fs::write(&path, "#!/bin/sh\nexec /bin/sh \"$@\"\n")
            .expect("Failed to write interpreter");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark interpreter executable");
        path
    }

    /// Arguments recorded by the stand-in bootstrap script, script path first.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.work_dir().join(ARGS_FILE)).ok()?;
        Some(content.lines().map(str::to_string).collect())
    }
}
