//! Log file configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::io::{DEFAULT_FILE_MODE, FileTarget};

/// Configuration for a log file destination.
///
/// Meant to be embedded in an application's own YAML/JSON configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogFileConfig {
    /// Path of the log file
    pub path: PathBuf,
    /// Permission bits used when the file is created (unix only)
    #[serde(default = "default_mode")]
    pub mode: u32,
}

fn default_mode() -> u32 {
    DEFAULT_FILE_MODE
}

impl LogFileConfig {
    /// Create a configuration for the given path with the default mode.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: DEFAULT_FILE_MODE,
        }
    }

    /// Set the creation permission mode.
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Build the file target described by this configuration.
    pub fn target(&self) -> FileTarget {
        FileTarget::new(self.path.clone()).with_mode(self.mode)
    }
}
