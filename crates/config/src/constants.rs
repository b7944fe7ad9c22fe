//! Centralized constants for the rich-table workspace.
//!
//! Names of files, directories, and environment variables shared between the
//! config crate and the CLI.

// =============================================================================
// Config File Location
// =============================================================================

/// Directory name under the platform config root.
pub const APP_DIR_NAME: &str = "rich_table";

/// File name of the user config file.
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the `username` value from the config file.
pub const ENV_USERNAME: &str = "RICH_TABLE_USERNAME";

/// Overrides the `password` value from the config file.
pub const ENV_PASSWORD: &str = "RICH_TABLE_PASSWORD";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Config File Keys
// =============================================================================

/// Config file key holding the username.
pub const KEY_USERNAME: &str = "username";

/// Config file key holding the password.
pub const KEY_PASSWORD: &str = "password";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Printed once when the config file exists but cannot be read or parsed.
pub const INVALID_CONFIG_WARNING: &str = "Warning: Invalid config file.";
