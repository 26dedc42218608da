//! # synclog
//!
//! A thread-safe, durable, append-only log file writer.
//!
//! ## Overview
//!
//! synclog provides:
//! - **One destination**: A single file (or any `LogTarget`) opened in append mode
//! - **No torn lines**: Concurrent writers are serialized by one mutex
//! - **Durability**: Every successful write is synced to stable storage before returning
//! - **Distinct failures**: OS write errors, short writes, and sync errors are separate error kinds
//! - **Severity prefixes**: `STATUS` (none), `WARNING: `, `ERROR: `
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::thread;
//!
//! use synclog::{LogWriter, Severity};
//!
//! fn main() -> Result<(), synclog::LogError> {
//!     let log = Arc::new(LogWriter::new());
//!     log.open("app.log")?;
//!
//!     let handles: Vec<_> = (0..4)
//!         .map(|i| {
//!             let log = Arc::clone(&log);
//!             thread::spawn(move || log.write(&format!("worker {i} started"), Severity::Status))
//!         })
//!         .collect();
//!     for h in handles {
//!         h.join().expect("worker panicked")?;
//!     }
//!
//!     log.write("disk almost full", Severity::Warning)?;
//!     log.close()
//! }
//! ```
//!
//! ## Output format
//!
//! Each record is one line: the severity prefix, the message exactly as
//! given, and a single `\n`. There are no timestamps or other metadata.
//!
//! ```text
//! worker 0 started
//! WARNING: disk almost full
//! ERROR: something broke
//! ```
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod writer;

// Re-exports for convenience
pub use config::LogFileConfig;
pub use error::{LogError, Result, Stage};
pub use format::{Severity, format_line};
pub use io::{DEFAULT_FILE_MODE, FileTarget, InMemorySink, LogHandle, LogTarget};
pub use writer::{LogWriter, WriterState};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LogDiagnostic;
