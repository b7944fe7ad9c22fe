//! CLI argument definitions and parsing.
//!
//! The binary takes no options of its own; clap supplies `--help` and
//! `--version` and rejects anything else.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rich-table")]
#[command(
    about = "Show the rich-table credentials resolved from the environment and the user config file",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Environment:\n  RICH_TABLE_USERNAME  Overrides \"username\" from the config file\n  RICH_TABLE_PASSWORD  Overrides \"password\" from the config file\n  DOTENV_DISABLED=1    Skip loading a .env file\n  RUST_LOG             Log filter (e.g. RUST_LOG=debug)\n"
)]
pub struct Cli {}
