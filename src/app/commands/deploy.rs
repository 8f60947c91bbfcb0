//! The deployment trigger: run the bootstrap tool once and report its outcome.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, BootstrapInvocation, ChildExit, DeployConfig, ExitStatusPolicy};
use crate::ports::{InterpreterLocator, ProcessRunner};

/// Result of a completed deployment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub invocation: BootstrapInvocation,
    pub cwd: PathBuf,
    pub exit: ChildExit,
    pub policy: ExitStatusPolicy,
}

impl DeployOutcome {
    /// Exit code the trigger process should report.
    pub fn exit_code(&self) -> i32 {
        self.exit.exit_code(self.policy)
    }
}

/// Resolve the interpreter and build the bootstrap command without running it.
pub fn plan<L, R>(
    ctx: &AppContext<L, R>,
    config: &DeployConfig,
) -> Result<BootstrapInvocation, AppError>
where
    L: InterpreterLocator,
    R: ProcessRunner,
{
    let interpreter = ctx.locator().locate()?;
    let invocation = BootstrapInvocation::new(interpreter, config);
    debug!(command = %invocation.display_command(), "planned bootstrap command");
    Ok(invocation)
}

/// Run the bootstrap tool in `root` and wait for it to finish.
///
/// The folder, script and manifest are not checked beforehand; a missing
/// file is reported by the child and surfaces through its exit status.
pub fn execute<L, R>(
    ctx: &AppContext<L, R>,
    root: &Path,
    config: &DeployConfig,
) -> Result<DeployOutcome, AppError>
where
    L: InterpreterLocator,
    R: ProcessRunner,
{
    let invocation = plan(ctx, config)?;
    let exit = ctx.runner().run(&invocation, root)?;

    if exit.success() {
        info!("bootstrap finished successfully");
    } else {
        info!(status = %exit, policy = ?config.exit_status, "bootstrap failed");
    }

    Ok(DeployOutcome { invocation, cwd: root.to_path_buf(), exit, policy: config.exit_status })
}
