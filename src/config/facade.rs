//! Config loading entrypoint: defaults, then a file source, then the environment.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::KubecConfig;
use crate::error::KubecError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the user config file (if present) and the environment.
    pub fn load() -> Result<KubecConfig, KubecError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        Self::finish(builder)
    }

    /// Load from an explicit file, which must exist, and the environment.
    pub fn load_from_file(path: &Path) -> Result<KubecConfig, KubecError> {
        if !path.is_file() {
            return Err(KubecError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true)?;
        Self::finish(builder)
    }

    /// Path of the user config file, whether or not it exists.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<KubecConfig, KubecError> {
        let config: KubecConfig = environment::add_to_builder(builder)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            KubecError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        debug!(
            logging_enabled = config.logging.enabled,
            color = config.ui.color,
            "Configuration loaded"
        );
        Ok(config)
    }
}
