//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{LogError, Stage};

/// A diagnostic wrapper for log writer errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct LogDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &LogError) -> &'static str {
    match e {
        LogError::Open { .. } => "Check that the parent directory exists and is writable",
        LogError::ShortWrite { .. } => {
            "The destination accepted only part of the line; check free disk space"
        }
        LogError::Flush(_) => "The line may not be durable; check the underlying device",
        LogError::NotOpen => "Call open() before writing",
        LogError::AlreadyOpen => "Close the writer before opening another destination",
        LogError::Closed => "Create a new writer; a closed writer cannot be reopened",
        LogError::Write(_) | LogError::Close(_) => "Check the log destination",
    }
}

impl From<LogError> for LogDiagnostic {
    fn from(e: LogError) -> Self {
        let stage = e.stage();
        let help = help_for(&e).to_string();
        let severity = match stage {
            Stage::Lifecycle => Severity::Warning,
            _ => Severity::Error,
        };
        LogDiagnostic {
            message: format!("[{stage}] log writer failed"),
            source: Some(Box::new(e)),
            help: Some(help),
            severity,
        }
    }
}

impl From<LogError> for miette::Report {
    fn from(e: LogError) -> Self {
        miette::Report::new(LogDiagnostic::from(e))
    }
}
