//! Configuration loader for environment variables and the user config file.
//!
//! Responsibilities:
//! - Load the user config file from its platform-specific location.
//! - Apply environment variable overrides on top of file values.
//! - Provide a builder-pattern `ConfigLoader` with injectable sources.
//!
//! Does NOT handle:
//! - Persisting configuration; the config file is read-only to this crate.
//! - Validating credential contents.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;
mod warn;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{EnvSource, MapEnv, ProcessEnv, env_var_or_none};
pub use error::ConfigError;
pub use file::{FileConfig, FileSource, FsReader, MemoryFs};
pub use warn::{StderrWarnings, WarningSink};
