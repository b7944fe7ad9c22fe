//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Define the `EnvSource` capability the loader reads overrides from.
//! - Provide the process-environment and in-memory implementations.
//! - Filter empty values so they behave like unset variables.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Merging sources into an `AppConfig` (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty environment variables are treated as unset.
//! - Values are returned as-is; whitespace is NOT trimmed.
//! - Non-unicode values in the process environment are treated as unset.

use std::collections::HashMap;

/// A source of environment variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Read a variable from `env`, returning None if unset or empty.
pub fn env_var_or_none(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_env_var_or_none_filters_empty_strings() {
        let env = MapEnv::new()
            .with_var("EMPTY", "")
            .with_var("SPACES", "   ")
            .with_var("SET", "value");

        assert!(env_var_or_none(&env, "UNSET").is_none());
        assert!(
            env_var_or_none(&env, "EMPTY").is_none(),
            "Empty string env var should return None"
        );
        assert_eq!(
            env_var_or_none(&env, "SPACES"),
            Some("   ".to_string()),
            "Whitespace is kept as a real value"
        );
        assert_eq!(env_var_or_none(&env, "SET"), Some("value".to_string()));
    }

    #[test]
    fn test_map_env_from_iter_last_value_wins() {
        let env: MapEnv = [("KEY", "first"), ("KEY", "second")].into_iter().collect();
        assert_eq!(env.var("KEY"), Some("second".to_string()));
    }

    #[test]
    #[serial]
    fn test_process_env_reads_process_environment() {
        let key = "_RICH_TABLE_TEST_PROCESS_ENV";
        temp_env::with_vars([(key, Some("from-process"))], || {
            assert_eq!(ProcessEnv.var(key), Some("from-process".to_string()));
        });
        temp_env::with_vars([(key, None::<&str>)], || {
            assert!(ProcessEnv.var(key).is_none());
        });
    }
}
