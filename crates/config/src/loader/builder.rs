//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` holding the injected environment,
//!   filesystem, and warning capabilities.
//! - Resolve the config file path for the configured platform and home.
//! - Merge environment overrides over config file values into an `AppConfig`.
//!
//! Does NOT handle:
//! - Parsing file contents (delegated to file.rs).
//! - Environment filtering rules (delegated to env.rs).
//! - Writing the config file; this crate never writes it.
//!
//! Invariants / Assumptions:
//! - Non-empty environment variables take precedence over config file values.
//! - A missing config file is not an error and emits no warning.
//! - An unreadable or malformed config file emits exactly one warning and is
//!   treated as empty.
//! - `load()` never fails.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use std::path::PathBuf;

use super::env::{EnvSource, ProcessEnv, env_var_or_none};
use super::error::ConfigError;
use super::file::{FileConfig, FileSource, FsReader, read_file_config};
use super::warn::{StderrWarnings, WarningSink};
use crate::constants::{
    ENV_DOTENV_DISABLED, ENV_PASSWORD, ENV_USERNAME, INVALID_CONFIG_WARNING, KEY_PASSWORD,
    KEY_USERNAME,
};
use crate::path::{Platform, home_dir, resolve_config_path};
use crate::types::AppConfig;

/// Configuration loader that builds an `AppConfig` from the environment and
/// the user config file.
pub struct ConfigLoader {
    env: Box<dyn EnvSource>,
    files: Box<dyn FileSource>,
    warnings: Box<dyn WarningSink>,
    platform: Platform,
    home_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader reading the process environment and local filesystem.
    pub fn new() -> Self {
        Self {
            env: Box::new(ProcessEnv),
            files: Box::new(FsReader),
            warnings: Box::new(StderrWarnings),
            platform: Platform::current(),
            home_dir: None,
            config_path: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read overrides from `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Read the config file through `files` instead of the local filesystem.
    pub fn with_files(mut self, files: impl FileSource + 'static) -> Self {
        self.files = Box::new(files);
        self
    }

    /// Send user-visible warnings to `warnings` instead of stderr.
    pub fn with_warnings(mut self, warnings: impl WarningSink + 'static) -> Self {
        self.warnings = Box::new(warnings);
        self
    }

    /// Resolve the config path as if running on `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Resolve the config path under `home` instead of the user's home directory.
    pub fn with_home_dir(mut self, home: PathBuf) -> Self {
        self.home_dir = Some(home);
        self
    }

    /// Use `path` as the config file, bypassing platform resolution.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// The config file this loader reads.
    ///
    /// Returns `None` only when no explicit path or home directory was given
    /// and the home directory cannot be determined.
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }

        let home = match &self.home_dir {
            Some(home) => home.clone(),
            None => match home_dir() {
                Ok(home) => home,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping config file");
                    return None;
                }
            },
        };

        Some(resolve_config_path(self.platform, &home))
    }

    /// Read the config file, exposing any failure.
    ///
    /// A path that does not exist yields an empty `FileConfig`.
    pub fn try_load_file_config(&self) -> Result<FileConfig, ConfigError> {
        let Some(path) = self.config_path() else {
            return Ok(FileConfig::default());
        };

        if !self.files.exists(&path) {
            tracing::debug!(path = %path.display(), "No config file found");
            return Ok(FileConfig::default());
        }

        let config = read_file_config(self.files.as_ref(), &path)?;
        tracing::debug!(path = %path.display(), keys = config.len(), "Loaded config file");
        Ok(config)
    }

    /// Read the config file, recovering from any failure.
    ///
    /// An unreadable or malformed file is reported once through the warning
    /// sink and treated as empty.
    pub fn load_file_config(&self) -> FileConfig {
        match self.try_load_file_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    cause = ?std::error::Error::source(&e),
                    "Ignoring invalid config file"
                );
                self.warnings.warn(INVALID_CONFIG_WARNING);
                FileConfig::default()
            }
        }
    }

    /// Build the final configuration.
    ///
    /// Non-empty environment variables win over config file values; values
    /// missing from both sources are left unset.
    pub fn load(&self) -> AppConfig {
        let file = self.load_file_config();

        AppConfig::new(
            self.resolve(ENV_USERNAME, &file, KEY_USERNAME),
            self.resolve(ENV_PASSWORD, &file, KEY_PASSWORD),
        )
    }

    fn resolve(&self, var: &str, file: &FileConfig, key: &str) -> Option<String> {
        if let Some(value) = env_var_or_none(self.env.as_ref(), var) {
            tracing::debug!(var, "Using value from environment");
            return Some(value);
        }
        file.get(key).map(str::to_string)
    }
}
