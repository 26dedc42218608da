//! Severity tags for log lines.

use serde::Deserialize;

/// Severity of a log line.
///
/// Purely a formatting modifier: it selects the prefix written in front of
/// the message and nothing else. There is no filtering by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational line, written without a prefix
    #[default]
    Status,
    /// Written as `WARNING: <message>`
    #[serde(alias = "warn")]
    Warning,
    /// Written as `ERROR: <message>`
    Error,
}

impl Severity {
    /// The text placed in front of the message for this severity.
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Status => "",
            Severity::Warning => "WARNING: ",
            Severity::Error => "ERROR: ",
        }
    }

    /// Parse a severity from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "status" => Some(Severity::Status),
            "warning" | "warn" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Status => write!(f, "status"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
