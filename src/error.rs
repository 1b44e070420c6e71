//! Error types for kubec.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading, switching or writing a kubeconfig,
/// plus the few failures of the surrounding tool (settings, logging, prompts).
#[derive(Debug, Error)]
pub enum KubecError {
    #[error("Unable to locate kubeconfig: {0}")]
    LocatorError(String),

    #[error("kubeconfig file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read kubeconfig file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write kubeconfig {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse kubeconfig file {}: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to prepare kubeconfig write: {0}")]
    EncodeError(#[source] serde_yaml::Error),

    #[error("Context '{0}' not found")]
    ContextNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to get user input: {0}")]
    PromptError(String),
}

impl From<config::ConfigError> for KubecError {
    fn from(err: config::ConfigError) -> Self {
        KubecError::ConfigError(err.to_string())
    }
}
