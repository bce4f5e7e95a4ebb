//! Engine for orchestrating rule execution over class declarations.
//!
//! The engine does not discover or parse source files; an external front end
//! feeds it one [`ClassDeclaration`] at a time and merges the resulting
//! diagnostics into whatever report format the host tool requires.

use crate::config::Config;
use crate::decl::ClassDeclaration;
use crate::diag::{Diagnostic, DiagnosticReport};
use crate::oracle::TypeOracle;
use crate::rule::{ClassRule, RuleBox};

use tracing::{debug, info};

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: ClassRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the engine.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules against class declarations.
///
/// Use [`Engine::builder()`] to construct an instance. The engine holds no
/// mutable state between invocations; checking the same declaration twice
/// yields identical output, and separate declarations may be checked from
/// separate threads.
pub struct Engine {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks a single class declaration against all enabled rules.
    ///
    /// Rules run in registration order; each rule's diagnostics keep the
    /// source order the rule emitted them in.
    #[must_use]
    pub fn check_class(
        &self,
        class: &ClassDeclaration,
        oracle: &dyn TypeOracle,
    ) -> Vec<Diagnostic> {
        debug!("Checking class declaration: {}", class.name);

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_diagnostics = rule.check(class, oracle);
            let rule_diagnostics = self.apply_severity_override(rule.name(), rule_diagnostics);
            diagnostics.extend(rule_diagnostics);
        }

        diagnostics
    }

    /// Checks a sequence of class declarations and aggregates the results.
    #[must_use]
    pub fn check_all(
        &self,
        classes: &[ClassDeclaration],
        oracle: &dyn TypeOracle,
    ) -> DiagnosticReport {
        info!("Checking {} class declaration(s)", classes.len());

        let mut report = DiagnosticReport::new();
        for class in classes {
            report.diagnostics.extend(self.check_class(class, oracle));
            report.classes_checked += 1;
        }

        info!(
            "Check complete: {} diagnostic(s) in {} class(es)",
            report.diagnostics.len(),
            report.classes_checked
        );

        report
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Vec<Diagnostic> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for d in &mut diagnostics {
                d.severity = severity;
            }
        }
        diagnostics
    }
}
