//! Rule requiring controller endpoint methods to carry the `Action` suffix.
//!
//! # Rationale
//!
//! On REST controllers the `Action` suffix separates HTTP endpoint-handling
//! methods from internal helpers. The rule applies to classes that are, or
//! transitively extend, a configured base controller class; which class that
//! is differs per project, so it is injected at construction time instead of
//! being compiled in.
//!
//! # Exemptions
//!
//! - Abstract controllers
//! - Classes the symbol table does not know (skipped, not an error)
//! - Non-public, static, and magic (`__`-prefixed) methods

use standards_lint_core::{
    ClassDeclaration, ClassRule, Diagnostic, Severity, TypeOracle, Visibility,
};
use tracing::debug;

/// Rule name for controller-action-suffix.
pub const NAME: &str = "controller-action-suffix";

/// Diagnostic identifier emitted by this rule.
pub const IDENTIFIER: &str = "controller.actionMethodSuffix";

/// Base controller class assumed when none is configured.
pub const DEFAULT_BASE_CONTROLLER: &str = "App\\Http\\AbstractRestApiController";

const ACTION_SUFFIX: &str = "Action";
const MAGIC_PREFIX: &str = "__";

/// Requires public endpoint methods on REST controllers to end in `Action`.
#[derive(Debug, Clone)]
pub struct ControllerActionSuffix {
    /// Fully qualified name of the base controller class gating this rule.
    pub base_controller: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ControllerActionSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerActionSuffix {
    /// Creates a new rule gated on [`DEFAULT_BASE_CONTROLLER`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_controller: DEFAULT_BASE_CONTROLLER.to_string(),
            severity: Severity::Error,
        }
    }

    /// Sets the base controller class the rule is gated on.
    #[must_use]
    pub fn base_controller(mut self, qualified_name: impl Into<String>) -> Self {
        self.base_controller = qualified_name.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Whether the class is, or transitively extends, the base controller.
    fn is_controller(&self, class: &ClassDeclaration, oracle: &dyn TypeOracle) -> bool {
        let qualified =
            oracle.resolve_to_qualified_name(&class.name, class.namespace.as_deref());
        if !oracle.exists(&qualified) {
            debug!("Skipping unknown class: {qualified}");
            return false;
        }
        qualified == self.base_controller || oracle.is_subtype_of(&qualified, &self.base_controller)
    }
}

impl ClassRule for ControllerActionSuffix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires public controller endpoint methods to have the Action suffix"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, class: &ClassDeclaration, oracle: &dyn TypeOracle) -> Vec<Diagnostic> {
        if class.is_abstract || !self.is_controller(class, oracle) {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for method in &class.methods {
            if method.visibility != Visibility::Public
                || method.is_static
                || method.name.starts_with(MAGIC_PREFIX)
                || method.name.ends_with(ACTION_SUFFIX)
            {
                continue;
            }

            diagnostics.push(Diagnostic::new(
                IDENTIFIER,
                format!(
                    "Controller method \"{}::{}()\" must have the \"Action\" suffix (e.g. \"{}Action\").",
                    class.name, method.name, method.name
                ),
                method.start_line,
                self.severity,
            ));
        }

        diagnostics
    }
}
