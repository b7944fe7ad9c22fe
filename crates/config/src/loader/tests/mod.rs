//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test precedence between environment variables and file values.
//! - Test recovery from missing, unreadable, and malformed config files.
//! - Test dotenv loading against the process environment.
//!
//! Invariants:
//! - Tests touching process-global state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use crate::loader::warn::WarningSink;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Collects warnings so tests can count them.
#[derive(Clone, Default)]
pub struct RecordingWarnings {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingWarnings {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl WarningSink for RecordingWarnings {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Home directory used by in-memory tests.
pub fn test_home() -> PathBuf {
    PathBuf::from("home").join("tester")
}

/// Config path the loader resolves for `test_home()` on Linux-like hosts.
pub fn test_config_path() -> PathBuf {
    crate::path::resolve_config_path(crate::path::Platform::Other, &test_home())
}

/// Write `contents` at the Linux-style config location under `home`.
pub fn write_config_file(home: &Path, contents: &str) -> PathBuf {
    let path = crate::path::resolve_config_path(crate::path::Platform::Other, home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}
