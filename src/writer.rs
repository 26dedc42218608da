//! Thread-safe, durable, append-only log writer.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::config::LogFileConfig;
use crate::error::{LogError, Result};
use crate::format::{Severity, format_line};
use crate::io::{FileTarget, LogHandle, LogTarget};

/// Observable lifecycle state of a [`LogWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Created but not yet opened
    Unopened,
    /// Open and accepting writes
    Open,
    /// Closed; terminal
    Closed,
}

enum Slot {
    Unopened,
    Open {
        id: String,
        handle: Box<dyn LogHandle>,
    },
    Closed,
}

impl Slot {
    fn state(&self) -> WriterState {
        match self {
            Slot::Unopened => WriterState::Unopened,
            Slot::Open { .. } => WriterState::Open,
            Slot::Closed => WriterState::Closed,
        }
    }
}

/// A single log destination shared by any number of threads.
///
/// Every operation takes `&self` and serializes on one mutex, so a writer is
/// usually shared as `Arc<LogWriter>`. A `write` holds the lock across both
/// the append and the sync to stable storage; lines from concurrent callers
/// never interleave, and a successful `write` is durable when it returns.
///
/// Lifecycle: `new` → `open` → any number of `write`s → `close`. Closing is
/// terminal.
pub struct LogWriter {
    slot: Mutex<Slot>,
}

impl LogWriter {
    /// Create an unopened writer.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Unopened),
        }
    }

    // Slot is only replaced after the I/O it depends on has finished, so a
    // panic inside a handle leaves it consistent.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open (or create) the file at `path` for appending.
    ///
    /// A newly created file gets mode `0o755` on unix.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<()> {
        self.open_target(&FileTarget::new(path.as_ref()))
    }

    /// Open the file described by `config` for appending.
    pub fn open_config(&self, config: &LogFileConfig) -> Result<()> {
        self.open_target(&config.target())
    }

    /// Open an arbitrary target for appending.
    ///
    /// On failure the OS error is returned unchanged inside
    /// [`LogError::Open`] and the writer stays unopened.
    pub fn open_target(&self, target: &dyn LogTarget) -> Result<()> {
        let mut slot = self.lock();
        match *slot {
            Slot::Unopened => {}
            Slot::Open { .. } => return Err(LogError::AlreadyOpen),
            Slot::Closed => return Err(LogError::Closed),
        }

        let handle = target.open_append().map_err(|source| LogError::Open {
            target: target.id().to_string(),
            source,
        })?;
        debug!(destination = target.id(), "opened log destination");

        *slot = Slot::Open {
            id: target.id().to_string(),
            handle,
        };
        Ok(())
    }

    /// Append `message` with the given severity and sync it to storage.
    ///
    /// Failures are reported without retrying, and the lock is released on
    /// every path:
    /// - [`LogError::Write`] if the OS rejected the append (no sync attempted)
    /// - [`LogError::ShortWrite`] if only part of the line was accepted
    ///   (no sync attempted)
    /// - [`LogError::Flush`] if the sync failed after a complete append
    pub fn write(&self, message: &str, severity: Severity) -> Result<()> {
        let line = format_line(message, severity);

        let mut slot = self.lock();
        let (id, handle) = match &mut *slot {
            Slot::Open { id, handle } => (id.as_str(), handle),
            Slot::Unopened => return Err(LogError::NotOpen),
            Slot::Closed => return Err(LogError::Closed),
        };

        let written = handle.write(&line).map_err(LogError::Write)?;
        if written < line.len() {
            warn!(
                destination = id,
                written,
                expected = line.len(),
                "short write to log destination"
            );
            return Err(LogError::ShortWrite {
                written,
                expected: line.len(),
            });
        }

        if let Err(e) = handle.sync() {
            warn!(destination = id, error = %e, "failed to sync log destination");
            return Err(LogError::Flush(e));
        }
        Ok(())
    }

    /// Write a line without a severity prefix.
    pub fn status(&self, message: &str) -> Result<()> {
        self.write(message, Severity::Status)
    }

    /// Write a `WARNING: ` line.
    pub fn warning(&self, message: &str) -> Result<()> {
        self.write(message, Severity::Warning)
    }

    /// Write an `ERROR: ` line.
    pub fn error(&self, message: &str) -> Result<()> {
        self.write(message, Severity::Error)
    }

    /// Close the destination.
    ///
    /// Waits for any in-flight write holding the lock. The writer is closed
    /// afterwards even if the OS reports an error on release; later writes
    /// fail with [`LogError::Closed`].
    pub fn close(&self) -> Result<()> {
        let mut slot = self.lock();
        match std::mem::replace(&mut *slot, Slot::Closed) {
            Slot::Open { id, handle } => {
                let result = handle.close();
                debug!(destination = %id, ok = result.is_ok(), "closed log destination");
                result.map_err(LogError::Close)
            }
            Slot::Unopened => {
                *slot = Slot::Unopened;
                Err(LogError::NotOpen)
            }
            Slot::Closed => Err(LogError::Closed),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WriterState {
        self.lock().state()
    }

    /// Identifier of the open destination, if any.
    pub fn target_id(&self) -> Option<String> {
        match &*self.lock() {
            Slot::Open { id, .. } => Some(id.clone()),
            Slot::Unopened | Slot::Closed => None,
        }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.lock();
        let id = match &*slot {
            Slot::Open { id, .. } => Some(id.as_str()),
            Slot::Unopened | Slot::Closed => None,
        };
        f.debug_struct("LogWriter")
            .field("state", &slot.state())
            .field("destination", &id)
            .finish()
    }
}
