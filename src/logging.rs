//! Logging System
//!
//! Structured logging using the `tracing` crate. Logging is off unless enabled by
//! configuration, `--verbose`, or `KUBEC_LOG`, and goes to stderr by default so
//! stdout carries only command output.

use crate::error::KubecError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive; overrides level and modules.
pub const LOG_FILTER_ENV: &str = "KUBEC_LOG";
const LOG_FORMAT_ENV: &str = "KUBEC_LOG_FORMAT";
const LOG_OUTPUT_ENV: &str = "KUBEC_LOG_OUTPUT";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, stdout, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output is "file" (defaults to the user data directory)
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `KUBEC_LOG`, `KUBEC_LOG_FORMAT`, `KUBEC_LOG_OUTPUT`
/// 2. CLI flags, already folded into `config` by the binary
/// 3. Configuration file
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), KubecError> {
    let enabled = config.map(|c| c.enabled).unwrap_or(false);
    if !enabled && std::env::var_os(LOG_FILTER_ENV).is_none() {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != LogOutput::File;

    let writer = match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => {
            let path = resolve_log_file_path(config.and_then(|c| c.file.clone()))?;
            BoxMakeWriter::new(Arc::new(open_log_file(&path)?))
        }
    };

    let base_subscriber = Registry::default().with(filter);
    let result = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| KubecError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Pick the log file: the configured path (which `--log-file` already
/// overrides), then `<data dir>/kubec/kubec.log`.
pub fn resolve_log_file_path(configured: Option<PathBuf>) -> Result<PathBuf, KubecError> {
    if let Some(path) = configured {
        return Ok(path);
    }
    ProjectDirs::from("", "", "kubec")
        .map(|dirs| dirs.data_dir().join("kubec.log"))
        .ok_or_else(|| {
            KubecError::ConfigError("Could not determine a data directory for the log file".into())
        })
}

fn open_log_file(path: &Path) -> Result<std::fs::File, KubecError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            KubecError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            KubecError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, KubecError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| KubecError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<LogFormat, KubecError> {
    select_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref(), config)
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<LogOutput, KubecError> {
    select_output(std::env::var(LOG_OUTPUT_ENV).ok().as_deref(), config)
}

/// An environment value wins over the config and must itself be valid.
fn select_format(
    from_env: Option<&str>,
    config: Option<&LoggingConfig>,
) -> Result<LogFormat, KubecError> {
    match from_env {
        Some(format) => parse_format(format),
        None => parse_format(config.map(|c| c.format.as_str()).unwrap_or("text")),
    }
}

fn select_output(
    from_env: Option<&str>,
    config: Option<&LoggingConfig>,
) -> Result<LogOutput, KubecError> {
    match from_env {
        Some(output) => parse_output(output),
        None => parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr")),
    }
}

fn parse_format(format: &str) -> Result<LogFormat, KubecError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(KubecError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_output(output: &str) -> Result<LogOutput, KubecError> {
    match output {
        "stdout" => Ok(LogOutput::Stdout),
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        _ => Err(KubecError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr', 'stdout', or 'file')",
            output
        ))),
    }
}

/// Check level, format and output values without installing anything.
pub fn validate_config(config: &LoggingConfig) -> Result<(), String> {
    const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
    if !LEVELS.contains(&config.level.as_str()) {
        return Err(format!(
            "Invalid log level: {} (must be one of {})",
            config.level,
            LEVELS.join(", ")
        ));
    }
    parse_format(&config.format).map_err(config_message)?;
    parse_output(&config.output).map_err(config_message)?;
    Ok(())
}

fn config_message(err: KubecError) -> String {
    match err {
        KubecError::ConfigError(msg) => msg,
        other => other.to_string(),
    }
}
