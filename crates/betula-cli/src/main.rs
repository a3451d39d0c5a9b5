//! Betula CLI
//!
//! Command-line interface for Betula - personal bookmark management.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use betula_core::{Config, Store};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::{Output, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    init_logging(config.log_level.as_deref());

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    debug!("Using database {:?}", config.database);
    let mut store = Store::open_with_config(&config)
        .with_context(|| format!("Failed to open database {:?}", config.database))?;

    match cli.command {
        Commands::Add {
            url,
            title,
            description,
            private,
            categories,
        } => {
            let post = commands::post::build_post(url, title, description, private, categories);
            commands::post::add(&mut store, post, &output)?;
        }
    }

    Ok(())
}

/// Log to stderr. RUST_LOG wins over the configured level.
fn init_logging(log_level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = log_level.unwrap_or("warn");
        EnvFilter::new(format!("betula_core={},betula_cli={}", level, level))
    });

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
