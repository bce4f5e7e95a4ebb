//! Rule trait for defining structural convention checks.

use crate::decl::ClassDeclaration;
use crate::diag::{Diagnostic, Severity};
use crate::oracle::TypeOracle;

/// A per-class convention rule.
///
/// Implement this trait to create rules that inspect a single class
/// declaration. Rules are stateless and read-only: the same declaration
/// checked twice must yield identical diagnostics, and rules on different
/// declarations may run in parallel. Within one declaration, diagnostics
/// must be emitted in source order.
///
/// # Example
///
/// ```ignore
/// use standards_lint_core::{ClassDeclaration, ClassRule, Diagnostic, Severity, TypeOracle};
///
/// pub struct NoFinalHelpers;
///
/// impl ClassRule for NoFinalHelpers {
///     fn name(&self) -> &'static str { "no-final-helpers" }
///
///     fn check(&self, class: &ClassDeclaration, _oracle: &dyn TypeOracle) -> Vec<Diagnostic> {
///         if class.name.ends_with("Helper") {
///             vec![Diagnostic::new(
///                 "helper.discouraged",
///                 format!("Helper class \"{}\" is discouraged.", class.name),
///                 class.start_line,
///                 Severity::Warning,
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait ClassRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "use-case-invoke").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single class declaration and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `class` - The declaration under inspection
    /// * `oracle` - Symbol queries for type existence and inheritance
    ///
    /// # Returns
    ///
    /// Diagnostics in source order; empty when the class is compliant or
    /// outside the rule's trigger condition.
    fn check(&self, class: &ClassDeclaration, oracle: &dyn TypeOracle) -> Vec<Diagnostic>;
}

/// Type alias for boxed [`ClassRule`] trait objects.
pub type RuleBox = Box<dyn ClassRule>;
