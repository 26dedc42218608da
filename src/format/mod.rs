//! Line formatting for log messages.
//!
//! This module provides:
//! - `Severity`: The STATUS / WARNING / ERROR tag of a message
//! - `format_line`: The single formatting rule applied before every write
//!
//! A line is the severity prefix, the message exactly as given, and one
//! trailing `\n`. The message is not validated or escaped; embedded newlines
//! and control characters pass through unchanged.

mod severity;

pub use severity::Severity;

/// Format a message into the exact bytes appended to the log.
pub fn format_line(message: &str, severity: Severity) -> Vec<u8> {
    let prefix = severity.prefix();
    let mut line = Vec::with_capacity(prefix.len() + message.len() + 1);
    line.extend_from_slice(prefix.as_bytes());
    line.extend_from_slice(message.as_bytes());
    line.push(b'\n');
    line
}
