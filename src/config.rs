//! Configuration System
//!
//! Settings for kubec itself (not the kubeconfig it edits): logging and UI options.
//! Layered from built-in defaults, an optional TOML file, and `KUBEC_*` environment
//! variables, in that order.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubecConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Terminal presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colored output (still disabled by NO_COLOR or a non-terminal stdout)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Rows shown at once by the interactive picker
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    15
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            page_size: default_page_size(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
    Ui(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Ui(msg) => write!(f, "UI: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl UiConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl KubecConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = crate::logging::validate_config(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }
        if let Err(e) = self.ui.validate() {
            errors.push(ValidationError::Ui(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
