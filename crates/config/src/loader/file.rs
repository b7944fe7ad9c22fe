//! Config file reading and parsing.
//!
//! Responsibilities:
//! - Define the `FileSource` capability the loader reads the config file through.
//! - Provide the filesystem and in-memory implementations.
//! - Parse file contents into a `FileConfig` mapping.
//!
//! Does NOT handle:
//! - Resolving where the file lives (see `crate::path`).
//! - Reporting failures to the user (see builder.rs).
//!
//! Invariants:
//! - Only a top-level JSON object is accepted.
//! - Only string-valued entries are kept; other values are treated as absent.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// A source of config file contents.
pub trait FileSource {
    /// Returns whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileSource for FsReader {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Files held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl FileSource for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// String values parsed from the user config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    values: BTreeMap<String, String>,
}

impl FileConfig {
    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse config file contents read from `path`.
pub(crate) fn parse_file_config(path: &Path, content: &str) -> Result<FileConfig, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let serde_json::Value::Object(object) = value else {
        return Err(ConfigError::ConfigFileNotObject {
            path: path.to_path_buf(),
        });
    };

    let values = object
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            other => {
                tracing::debug!(
                    key = %key,
                    kind = json_kind(&other),
                    "Ignoring non-string config value"
                );
                None
            }
        })
        .collect();

    Ok(FileConfig { values })
}

/// Read and parse the config file at `path` through `files`.
pub(crate) fn read_file_config(
    files: &dyn FileSource,
    path: &Path,
) -> Result<FileConfig, ConfigError> {
    let content = files
        .read_to_string(path)
        .map_err(|e| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    parse_file_config(path, &content)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
