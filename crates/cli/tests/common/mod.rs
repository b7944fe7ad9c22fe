//! Shared test utilities for rich-table integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the binary at a temporary home directory.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `HOME` controls the home directory on Unix-like hosts.

use assert_cmd::Command;
use rich_table_config::{Platform, constants, resolve_config_path};
use std::path::{Path, PathBuf};

/// Returns a hermetic `rich-table` command whose home directory is `home`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credential and log filter env vars are cleared to ensure no leakage from the host.
pub fn rich_table_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rich-table");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("HOME", home);

    // Clear potential host leakage
    cmd.env_remove(constants::ENV_USERNAME)
        .env_remove(constants::ENV_PASSWORD)
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` where the binary looks for its config file under `home`.
#[allow(dead_code)]
pub fn write_config(home: &Path, contents: &str) -> PathBuf {
    let path = resolve_config_path(Platform::current(), home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}
