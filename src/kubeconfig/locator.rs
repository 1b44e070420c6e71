//! Kubeconfig path resolution: `$KUBECONFIG` when set, otherwise `~/.kube/config`.

use crate::error::KubecError;
use directories::BaseDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit kubeconfig path.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

const KUBE_DIR: &str = ".kube";
const CONFIG_FILE: &str = "config";

/// Resolve the kubeconfig path from the process environment.
pub fn locate() -> Result<PathBuf, KubecError> {
    resolve(std::env::var_os(KUBECONFIG_ENV), home_dir())
}

/// Apply the location precedence to already-read inputs.
///
/// A non-empty override is used verbatim as a single path. `home` is only
/// consulted when there is no override.
pub fn resolve(
    override_path: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, KubecError> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    home.map(|home| home.join(KUBE_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            KubecError::LocatorError(format!(
                "home directory could not be determined and {} is not set",
                KUBECONFIG_ENV
            ))
        })
}

/// Current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), KubecError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|source| KubecError::WriteError {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
