//! User-visible warnings raised while loading configuration.

use std::io::Write;

/// Receives warnings meant for the person running the program.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Writes each warning as one line to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrWarnings;

impl WarningSink for StderrWarnings {
    fn warn(&self, message: &str) {
        // Nothing useful to do if stderr itself is gone.
        let _ = writeln!(std::io::stderr().lock(), "{}", message);
    }
}
