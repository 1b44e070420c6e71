//! Storage seam for the kubeconfig document.
//!
//! Context queries and switching are written against [`KubeconfigStore`]; the CLI
//! uses the file-backed store and tests can use the in-memory one.

use super::codec;
use super::document::Kubeconfig;
use super::locator;
use crate::error::KubecError;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Loads and saves whole kubeconfig documents.
pub trait KubeconfigStore {
    /// Read the current document. Each call reads fresh state.
    fn load(&self) -> Result<Kubeconfig, KubecError>;

    /// Replace the stored document with `config`.
    fn save(&self, config: &Kubeconfig) -> Result<(), KubecError>;

    /// Human-readable location, used in log fields.
    fn location(&self) -> String;
}

/// Kubeconfig stored in a YAML file on disk.
#[derive(Debug, Clone)]
pub struct FileKubeconfigStore {
    path: PathBuf,
}

impl FileKubeconfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the location resolved from `$KUBECONFIG` or the home directory.
    pub fn locate() -> Result<Self, KubecError> {
        locator::locate().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KubeconfigStore for FileKubeconfigStore {
    fn load(&self) -> Result<Kubeconfig, KubecError> {
        codec::load(&self.path)
    }

    fn save(&self, config: &Kubeconfig) -> Result<(), KubecError> {
        codec::save(&self.path, config)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Kubeconfig held in memory.
#[derive(Debug, Default)]
pub struct MemoryKubeconfigStore {
    document: RefCell<Kubeconfig>,
    saves: Cell<usize>,
    reject_saves: Cell<bool>,
}

impl MemoryKubeconfigStore {
    pub fn new(document: Kubeconfig) -> Self {
        Self {
            document: RefCell::new(document),
            ..Default::default()
        }
    }

    /// Copy of the stored document.
    pub fn snapshot(&self) -> Kubeconfig {
        self.document.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every later save fail with a permission error.
    pub fn reject_saves(&self) {
        self.reject_saves.set(true);
    }
}

impl KubeconfigStore for MemoryKubeconfigStore {
    fn load(&self) -> Result<Kubeconfig, KubecError> {
        Ok(self.snapshot())
    }

    fn save(&self, config: &Kubeconfig) -> Result<(), KubecError> {
        if self.reject_saves.get() {
            return Err(KubecError::WriteError {
                path: PathBuf::from(self.location()),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "store is read-only",
                ),
            });
        }
        *self.document.borrow_mut() = config.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
