//! Rule requiring `UseCase` classes to declare an `__invoke` method.
//!
//! # Rationale
//!
//! A use case represents a single application action and is expected to be
//! callable through exactly one entry point. A `UseCase`-suffixed class
//! without `__invoke` cannot be dispatched the way the convention assumes.
//!
//! # Exemptions
//!
//! - Classes whose name does not end in `UseCase` (case-sensitive suffix
//!   match; `UseCase` embedded mid-name does not count)
//! - Abstract classes, which define shared behavior without being directly
//!   invocable

use standards_lint_core::{ClassDeclaration, ClassRule, Diagnostic, Severity, TypeOracle};

/// Rule name for use-case-invoke.
pub const NAME: &str = "use-case-invoke";

/// Diagnostic identifier emitted by this rule.
pub const IDENTIFIER: &str = "useCase.missingInvoke";

const USE_CASE_SUFFIX: &str = "UseCase";
const INVOKE_METHOD: &str = "__invoke";

/// Requires non-abstract `UseCase` classes to declare `__invoke`.
#[derive(Debug, Clone)]
pub struct UseCaseInvoke {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for UseCaseInvoke {
    fn default() -> Self {
        Self::new()
    }
}

impl UseCaseInvoke {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ClassRule for UseCaseInvoke {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires UseCase classes to have an __invoke method"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, class: &ClassDeclaration, _oracle: &dyn TypeOracle) -> Vec<Diagnostic> {
        if !class.name.ends_with(USE_CASE_SUFFIX) || class.is_abstract {
            return Vec::new();
        }

        if class.find_method(INVOKE_METHOD).is_some() {
            return Vec::new();
        }

        // No method to anchor on; the class's own line is the anchor.
        vec![Diagnostic::new(
            IDENTIFIER,
            format!(
                "UseCase class \"{}\" must have an __invoke method.",
                class.name
            ),
            class.start_line,
            self.severity,
        )]
    }
}
