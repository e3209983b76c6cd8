use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSeverity {
    Error,
    Warning,
    Info,
    Hint,
}

impl MarkerSeverity {
    pub fn is_error(self) -> bool {
        matches!(self, MarkerSeverity::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSeverity::Error => "error",
            MarkerSeverity::Warning => "warning",
            MarkerSeverity::Info => "info",
            MarkerSeverity::Hint => "hint",
        }
    }
}

/// One diagnostic reported by the type-checking service for the current
/// snippet contents. Positions are 1-based. Markers are recomputed from
/// scratch on every run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMarker {
    pub severity: MarkerSeverity,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl DiagnosticMarker {
    pub fn new(
        severity: MarkerSeverity,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn error(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(MarkerSeverity::Error, message, line, column)
    }
}
