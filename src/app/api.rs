//! API Facade for the application.
//!
//! Glues configuration loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{CommandProcessRunner, SystemInterpreterLocator};
use crate::app::{AppContext, commands::deploy, config};
use crate::domain::{AppError, BootstrapInvocation, DeployConfig, ExitStatusPolicy};

pub use crate::app::commands::deploy::DeployOutcome;

/// Caller-supplied overrides layered on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Config file to read instead of `deploy-deps.toml`.
    pub config_path: Option<PathBuf>,
    /// Interpreter to use instead of the configured or discovered one.
    pub interpreter: Option<PathBuf>,
    /// Report success regardless of the bootstrap tool's exit status.
    pub ignore_exit_status: bool,
}

impl DeployOptions {
    fn resolve(&self, root: &Path) -> Result<DeployConfig, AppError> {
        let mut config = config::load_config(root, self.config_path.as_deref())?;
        if let Some(interpreter) = &self.interpreter {
            config.interpreter = Some(interpreter.clone());
        }
        if self.ignore_exit_status {
            config.exit_status = ExitStatusPolicy::Ignore;
        }
        Ok(config)
    }
}

fn create_context(
    config: &DeployConfig,
) -> AppContext<SystemInterpreterLocator, CommandProcessRunner> {
    AppContext::new(
        SystemInterpreterLocator::new(config.interpreter.clone()),
        CommandProcessRunner::new(),
    )
}

/// Run the bootstrap tool from the current directory.
pub fn deploy(options: &DeployOptions) -> Result<DeployOutcome, AppError> {
    deploy_at(&std::env::current_dir()?, options)
}

/// Run the bootstrap tool from `root`.
pub fn deploy_at(root: &Path, options: &DeployOptions) -> Result<DeployOutcome, AppError> {
    let config = options.resolve(root)?;
    let ctx = create_context(&config);
    deploy::execute(&ctx, root, &config)
}

/// Build the bootstrap command for `root` without running it.
pub fn plan_at(root: &Path, options: &DeployOptions) -> Result<BootstrapInvocation, AppError> {
    let config = options.resolve(root)?;
    let ctx = create_context(&config);
    deploy::plan(&ctx, &config)
}
