//! deploy-deps: run the `deps/` bootstrap script and report its exit status.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{DeployOptions, DeployOutcome, deploy, deploy_at, plan_at};
pub use domain::{AppError, BootstrapInvocation, ChildExit, DeployConfig, ExitStatusPolicy};
