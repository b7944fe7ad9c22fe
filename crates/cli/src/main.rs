//! rich-table - show the credentials resolved for the current user.
//!
//! Responsibilities:
//! - Load `.env`, parse arguments, and initialize logging.
//! - Resolve configuration via `rich_table_config`.
//! - Hand the result to the table display.
//!
//! Does NOT handle:
//! - Config resolution rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE config loading so `.env` values act as
//!   environment overrides.
//! - Logs and warnings go to stderr; stdout carries only the table.

mod args;
mod display;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use rich_table_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load environment")?;

    let _cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = loader.config_path() {
        tracing::debug!(path = %path.display(), "Resolved config file path");
    }

    let config = loader.load();
    display::show(&config).context("Failed to write output")?;
    Ok(())
}
