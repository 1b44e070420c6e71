//! YAML encoding and file persistence for [`Kubeconfig`].

use super::document::Kubeconfig;
use super::locator::ensure_parent_dir;
use crate::error::KubecError;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decode a kubeconfig document. An empty (or comment-only) document is an
/// empty kubeconfig.
pub fn from_yaml(text: &str) -> Result<Kubeconfig, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Kubeconfig::default());
    }
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    if value.is_null() {
        return Ok(Kubeconfig::default());
    }
    serde_yaml::from_value(value)
}

/// Encode a kubeconfig document.
pub fn to_yaml(config: &Kubeconfig) -> Result<String, KubecError> {
    serde_yaml::to_string(config).map_err(KubecError::EncodeError)
}

/// Read and decode the kubeconfig at `path`.
pub fn load(path: &Path) -> Result<Kubeconfig, KubecError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(KubecError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(KubecError::ReadError {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = from_yaml(&text).map_err(|source| KubecError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        contexts = config.contexts.len(),
        "Loaded kubeconfig"
    );
    Ok(config)
}

/// Encode `config` and replace the file at `path` atomically.
///
/// Writes a sibling temporary file and renames it over the target. A symlinked
/// kubeconfig is followed so the link itself survives, and the existing file's
/// permissions are carried over to the replacement.
pub fn save(path: &Path, config: &Kubeconfig) -> Result<(), KubecError> {
    let rendered = to_yaml(config)?;

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    ensure_parent_dir(&target)?;

    let write_error = |source: io::Error| KubecError::WriteError {
        path: target.clone(),
        source,
    };

    let temp_path = temp_path_for(&target);
    fs::write(&temp_path, rendered.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(e)
    })?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(&temp_path, metadata.permissions()).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            write_error(e)
        })?;
    }

    fs::rename(&temp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(e)
    })?;

    debug!(path = %target.display(), bytes = rendered.len(), "Saved kubeconfig");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("config")));
    name.push(".kubec.tmp");
    path.with_file_name(name)
}
