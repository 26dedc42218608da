//! Configuration types for log destinations.
//!
//! This module provides:
//! - `LogFileConfig`: Deserializable description of a log file destination

mod file;

pub use file::LogFileConfig;
