//! Configuration management for rich-table.
//!
//! This crate resolves the per-OS user config file location and builds an
//! [`AppConfig`] from that file and environment variable overrides.

pub mod constants;
mod loader;
pub mod path;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, FileConfig, FileSource, FsReader, MapEnv, MemoryFs,
    ProcessEnv, StderrWarnings, WarningSink, env_var_or_none,
};
pub use path::{Platform, default_config_path, resolve_config_path};
pub use types::AppConfig;

/// Read the user config file from its default location.
///
/// Never fails; see [`ConfigLoader::load_file_config`].
pub fn load_file_config() -> FileConfig {
    ConfigLoader::new().load_file_config()
}

/// Build the configuration from the process environment and the user config file.
pub fn load_config() -> AppConfig {
    ConfigLoader::new().load()
}
