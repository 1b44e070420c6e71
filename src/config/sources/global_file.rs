//! Global config file source: $XDG_CONFIG_HOME/kubec/config.toml or ~/.config/kubec/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| crate::kubeconfig::locator::home_dir().map(|home| home.join(".config")))?;
    Some(config_home.join("kubec").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.is_file() => add_file(builder, &path, false),
        Some(path) => {
            debug!(config_path = %path.display(), "No user configuration file");
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add a TOML file source regardless of its extension.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let name = path.to_str().ok_or_else(|| {
        ConfigError::Message(format!(
            "Configuration path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}
