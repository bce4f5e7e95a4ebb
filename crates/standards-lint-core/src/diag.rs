//! Diagnostic types: what a rule produces and how a pass aggregates it.

use miette::Diagnostic as MietteDiagnostic;
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the pass.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single convention violation reported by a rule.
///
/// Never mutated after creation; the reporter only aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable machine-readable code (e.g. `useCase.missingInvoke`).
    pub identifier: String,
    /// Human-readable message.
    pub message: String,
    /// 1-based source line the violation is anchored to.
    pub line: usize,
    /// Severity of this diagnostic.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        message: impl Into<String>,
        line: usize,
        severity: Severity,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            message: message.into(),
            line,
            severity,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {} [{}] {}",
            self.line, self.severity, self.identifier, self.message
        )
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich error display.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
pub struct RenderedDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Diagnostic> for RenderedDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", d.identifier, d.message),
            help: Some(format!("reported at line {}", d.line)),
        }
    }
}

/// Aggregated result of running rules over a set of class declarations.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// All diagnostics, in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of class declarations checked.
    pub classes_checked: usize,
}

impl DiagnosticReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any error-level diagnostics.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_diagnostics_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Returns diagnostics filtered by identifier.
    #[must_use]
    pub fn by_identifier(&self, identifier: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.identifier == identifier)
            .collect()
    }

    /// Counts diagnostics as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.diagnostics.iter().filter(|d| d.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Adds diagnostics from another report.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.classes_checked += other.classes_checked;
    }

    /// Formats the report as a human-readable multi-line summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(report, "{diagnostic}");
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {} error(s), {} warning(s), {} info(s) in {} class(es)",
            errors, warnings, infos, self.classes_checked
        );

        report
    }

    /// Prints the report to stdout.
    pub fn print_report(&self) {
        print!("{}", self.format_report());
    }
}
