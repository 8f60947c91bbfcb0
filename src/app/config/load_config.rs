//! Deployment configuration loading from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, DeployConfig};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "deploy-deps.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    deploy: DeployConfig,
}

/// Load the deployment configuration.
///
/// An explicit `path` must exist. Without one, `deploy-deps.toml` under
/// `root` is used when present and built-in defaults otherwise.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<DeployConfig, AppError> {
    let config_path: PathBuf = match path {
        Some(explicit) => {
            let resolved = root.join(explicit);
            if !resolved.is_file() {
                return Err(AppError::ConfigMissing(explicit.to_path_buf()));
            }
            resolved
        }
        None => {
            let candidate = root.join(CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(DeployConfig::default());
            }
            candidate
        }
    };

    debug!(path = %config_path.display(), "loading deploy config");
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

/// Parse the contents of a `deploy-deps.toml` file.
pub fn parse_config_content(content: &str) -> Result<DeployConfig, AppError> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.deploy)
}
