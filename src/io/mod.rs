//! Destination abstractions for the log writer.
//!
//! This module provides:
//! - `LogTarget`: Trait for destinations that can be opened in append mode
//! - `LogHandle`: Trait for an open destination (write, sync, close)
//! - `FileTarget`: Append-only file on disk
//! - `InMemorySink`: In-memory destination for testing and embedding

mod file;
mod memory;
mod target;

pub use file::{DEFAULT_FILE_MODE, FileTarget};
pub use memory::InMemorySink;
pub use target::{LogHandle, LogTarget};
