//! Error types for log writer operations.
//!
//! This module provides:
//! - `Stage`: Indicates which step of the writer lifecycle failed
//! - `LogError`: Every failure a `LogWriter` can report, one variant per kind
//!
//! OS errors are carried verbatim. A short write is a separate variant with
//! no OS error behind it, so callers can tell "the OS rejected the bytes"
//! apart from "the OS silently accepted only part of them".

use std::fmt;
use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening or creating the destination
    Open,
    /// Appending the formatted line
    Write,
    /// Syncing appended bytes to stable storage
    Flush,
    /// Releasing the destination
    Close,
    /// Operation not valid in the writer's current state
    Lifecycle,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
            Stage::Close => write!(f, "Close"),
            Stage::Lifecycle => write!(f, "Lifecycle"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    /// The destination could not be opened or created.
    #[error("failed to open log destination '{target}': {source}")]
    Open {
        /// Identifier of the destination (usually its path)
        target: String,
        #[source]
        source: io::Error,
    },

    /// The OS rejected the append.
    #[error("failed to write log message: {0}")]
    Write(#[source] io::Error),

    /// The OS accepted fewer bytes than the formatted line holds.
    #[error("short write: {written} of {expected} bytes written to the log")]
    ShortWrite { written: usize, expected: usize },

    /// The bytes were accepted but could not be synced to stable storage.
    #[error("failed to flush log to stable storage: {0}")]
    Flush(#[source] io::Error),

    /// The OS reported an error while releasing the destination.
    #[error("failed to close log destination: {0}")]
    Close(#[source] io::Error),

    #[error("log writer has not been opened")]
    NotOpen,

    #[error("log writer is already open")]
    AlreadyOpen,

    #[error("log writer is closed")]
    Closed,
}

impl LogError {
    /// The lifecycle stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            LogError::Open { .. } => Stage::Open,
            LogError::Write(_) | LogError::ShortWrite { .. } => Stage::Write,
            LogError::Flush(_) => Stage::Flush,
            LogError::Close(_) => Stage::Close,
            LogError::NotOpen | LogError::AlreadyOpen | LogError::Closed => Stage::Lifecycle,
        }
    }

    /// The underlying OS error, if this failure came from one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            LogError::Open { source, .. } => Some(source),
            LogError::Write(e) | LogError::Flush(e) | LogError::Close(e) => Some(e),
            LogError::ShortWrite { .. }
            | LogError::NotOpen
            | LogError::AlreadyOpen
            | LogError::Closed => None,
        }
    }

    /// True for a partial write reported without an OS error.
    pub fn is_short_write(&self) -> bool {
        matches!(self, LogError::ShortWrite { .. })
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
