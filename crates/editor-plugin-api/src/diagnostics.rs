//! Positioned diagnostics surfaced to the host editor.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// An error/warning record with an optional source location.
///
/// `line` and `column` are 1-based; `None` means the position is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedInfo {
    pub severity: Severity,
    pub message: String,
    /// URI of the document the record refers to, if known
    #[serde(default)]
    pub system_id: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl PositionedInfo {
    /// An error record with no location
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            system_id: None,
            line: None,
            column: None,
        }
    }

    /// An informational record with no location
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            system_id: None,
            line: None,
            column: None,
        }
    }

    /// Attach a source location
    pub fn at<S: Into<String>>(mut self, system_id: S, line: Option<u32>, column: Option<u32>) -> Self {
        self.system_id = Some(system_id.into());
        self.line = line;
        self.column = column;
        self
    }
}

/// The single aggregated failure of a transformation run.
///
/// Every failure category ends up here: the ordered records collected while
/// preparing, compiling, and running the pipeline.
#[derive(Debug, Clone, thiserror::Error)]
#[error("transformation failed with {} diagnostic(s)", .errors.len())]
pub struct ErrorList {
    pub errors: Vec<PositionedInfo>,
}

impl ErrorList {
    pub fn new(errors: Vec<PositionedInfo>) -> Self {
        Self { errors }
    }
}
