//! Log target and handle trait definitions.

use std::fmt::Debug;
use std::io::{self, Write};

/// Trait for log destinations.
///
/// Implementors provide a way to open an append-only stream to a destination
/// such as a file or an in-memory buffer.
pub trait LogTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this target.
    ///
    /// This is used for error messages and diagnostics.
    /// Convention: the file path for files.
    fn id(&self) -> &str;

    /// Open the target for appending, creating it if absent.
    fn open_append(&self) -> io::Result<Box<dyn LogHandle>>;
}

/// An open, append-only log destination.
///
/// `write` is called once per line and its returned count is checked against
/// the line length, so implementations must not retry partial writes
/// internally.
pub trait LogHandle: Write + Send {
    /// Force previously written bytes to stable storage.
    fn sync(&mut self) -> io::Result<()>;

    /// Release the destination, reporting any error surfaced on release.
    fn close(self: Box<Self>) -> io::Result<()>;
}
