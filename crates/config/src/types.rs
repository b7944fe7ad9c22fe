//! Resolved configuration types.
//!
//! Responsibilities:
//! - Define `AppConfig`, the record handed to the display routine.
//!
//! Does NOT handle:
//! - Deciding where values come from (see `loader`).
//!
//! Invariants:
//! - The password is held as a `SecretString` so `Debug` output never prints it.

use secrecy::{ExposeSecret, SecretString};

/// Credentials resolved from the environment and the user config file.
///
/// Either field may be absent when no source supplied it.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl AppConfig {
    /// Create a config from optional plain values.
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            username,
            password: password.map(|p| SecretString::new(p.into())),
        }
    }

    /// The username, if any source supplied one.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password, exposed as plain text.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }
}
