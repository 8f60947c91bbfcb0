//! Working-directory configuration loading.
//!
//! The schema itself lives in `domain::deploy_config`.

mod load_config;

pub use load_config::{CONFIG_FILE, load_config, parse_config_content};
