//! CLI parse: clap types for kubec. No behavior; definitions only.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// kubec - switch Kubernetes contexts
#[derive(Parser, Debug)]
#[command(name = "kubec", version, disable_version_flag = true)]
#[command(about = "A tool to easily switch Kubernetes contexts")]
#[command(
    long_about = "kubec is a command-line tool for easily switching Kubernetes current-context.\n\n\
                  Run without arguments to pick a context interactively, or pass a context name \
                  to switch to it directly."
)]
pub struct Cli {
    /// Context to switch to (omit to pick interactively)
    pub context: Option<String>,

    /// Show current context
    #[arg(short = 'c', long = "current")]
    pub current: bool,

    /// List available contexts
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output format for --current and --list (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Kubeconfig file path (overrides KUBECONFIG and ~/.kube/config)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// kubec configuration file path (overrides ~/.config/kubec/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, value_parser = ["stderr", "stdout", "file"])]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}
