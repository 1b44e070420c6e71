//! kubec CLI Binary
//!
//! Command-line interface for switching the current Kubernetes context.

use clap::Parser;
use kubec::cli::{command_name, map_error, Cli, Palette, RunContext};
use kubec::config::{ConfigLoader, KubecConfig};
use kubec::error::KubecError;
use kubec::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", map_error(&e, Palette::detect(true)));
            process::exit(1);
        }
    };

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli, settings.logging.clone());

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(command = command_name(&cli), "kubec starting");

    let context = match RunContext::new(cli.kubeconfig.clone(), settings.ui.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving kubeconfig: {}", e);
            eprintln!("{}", map_error(&e, Palette::detect(settings.ui.color)));
            process::exit(1);
        }
    };

    match context.execute(&cli) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e, context.palette()));
            process::exit(1);
        }
    }
}

fn load_settings(cli: &Cli) -> Result<KubecConfig, KubecError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args over the loaded settings.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    config
}
