//! Diagnostics attached to rules
//!
//! The outline never produces diagnostics itself. A separate grammar analysis engine checks
//! rules semantically and hands its findings back, per rule, through
//! [Rule::set_errors](super::Rule::set_errors). Records are stored and rendered as given: no
//! interpretation, validation or deduplication happens here.

use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// One externally computed finding about a rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDiagnostic {
    pub message: String,
    pub severity: DiagnosticSeverity,
    /// 1-based line the engine points at, if any
    pub line: Option<usize>,
    pub code: Option<String>,
}

impl RuleDiagnostic {
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            line: None,
            code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.severity, code, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
