//! Dirprint CLI Binary
//!
//! Command-line interface for capturing and comparing directory fingerprints.

use clap::Parser;
use dirprint::cli::{Cli, RunContext};
use dirprint::config::ConfigLoader;
use dirprint::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Dirprint CLI starting");

    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx.with_color(std::io::stdout().is_terminal()),
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", dirprint::cli::map_error(&e));
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = context.execute(&cli.command, &mut out) {
        error!("Command failed: {}", e);
        eprintln!("{}", dirprint::cli::map_error(&e));
        process::exit(1);
    }
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
