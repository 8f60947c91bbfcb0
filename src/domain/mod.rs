pub mod child_exit;
pub mod deploy_config;
pub mod error;
pub mod invocation;

pub use child_exit::ChildExit;
pub use deploy_config::{
    DEFAULT_FOLDER, DEFAULT_MANIFEST, DEFAULT_SCRIPT, DeployConfig, ExitStatusPolicy,
};
pub use error::AppError;
pub use invocation::{BootstrapInvocation, InvocationPlan};
