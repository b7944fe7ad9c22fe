//! Path helpers for the user config file location.
//!
//! Responsibilities:
//! - Map a `Platform` and a home directory to the config file path.
//! - Determine the current platform and home directory.
//!
//! Does NOT handle:
//! - File I/O operations (see `loader::file`).
//! - Creating the config directory; the path is never checked or created.

use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::loader::ConfigError;

/// Operating system families with distinct config locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other Unix-like system.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }

    /// Directory segments between the home directory and the app directory.
    fn config_root(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["AppData", "Local"],
            Platform::MacOs => &["Library", "Application Support"],
            Platform::Other => &[".config"],
        }
    }
}

/// Returns the config file path for `platform` under `home`.
///
/// - Windows: `<home>/AppData/Local/rich_table/config.json`
/// - macOS: `<home>/Library/Application Support/rich_table/config.json`
/// - Others: `<home>/.config/rich_table/config.json`
pub fn resolve_config_path(platform: Platform, home: &Path) -> PathBuf {
    let mut path = home.to_path_buf();
    path.extend(platform.config_root());
    path.push(APP_DIR_NAME);
    path.push(CONFIG_FILE_NAME);
    path
}

/// Returns the current user's home directory.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::HomeDirUnavailable)
}

/// Returns the config file path for the running platform and user.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(resolve_config_path(Platform::current(), &home_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn home() -> PathBuf {
        PathBuf::from("home").join("alice")
    }

    #[test]
    fn test_windows_path() {
        let path = resolve_config_path(Platform::Windows, &home());
        assert!(path.ends_with("AppData/Local/rich_table/config.json"));
        assert!(path.starts_with(home()));
    }

    #[test]
    fn test_macos_path() {
        let path = resolve_config_path(Platform::MacOs, &home());
        assert!(path.ends_with("Library/Application Support/rich_table/config.json"));
        assert!(path.starts_with(home()));
    }

    #[test]
    fn test_other_path() {
        let path = resolve_config_path(Platform::Other, &home());
        assert!(path.ends_with(".config/rich_table/config.json"));
        assert_eq!(
            path,
            home().join(".config").join("rich_table").join("config.json")
        );
    }

    #[test]
    fn test_platform_from_os_name() {
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("linux"), Platform::Other);
        assert_eq!(Platform::from_os_name("freebsd"), Platform::Other);
    }

    #[test]
    #[serial]
    fn test_default_config_path_uses_current_platform() {
        let Ok(home) = home_dir() else {
            return;
        };
        let actual = default_config_path().unwrap();
        assert_eq!(actual, resolve_config_path(Platform::current(), &home));
    }
}
