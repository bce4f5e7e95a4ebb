//! Rule requiring `UseCase::__invoke` parameters to be typed against
//! interfaces rather than concrete classes.
//!
//! # Rationale
//!
//! A use case should depend on an interface describing the data it needs,
//! not on the concrete request or command object that happens to supply it.
//! Built-in and pseudo types are exempt, as are type names the symbol table
//! does not know (unknown symbols cannot be judged, and failing the build
//! over a not-yet-indexed vendor type would be a false positive).
//!
//! Union and intersection types are checked member by member: a union is not
//! acceptable merely because one of its members is, so every offending member
//! gets its own diagnostic.

use standards_lint_core::{
    ClassDeclaration, ClassRule, Diagnostic, MethodDeclaration, ParameterDeclaration, Severity,
    TypeExpression, TypeOracle,
};

/// Rule name for use-case-parameter-interface.
pub const NAME: &str = "use-case-parameter-interface";

/// Diagnostic identifier emitted by this rule.
pub const IDENTIFIER: &str = "useCase.parameterMustBeInterface";

const USE_CASE_SUFFIX: &str = "UseCase";
const INVOKE_METHOD: &str = "__invoke";

/// PHP built-in and pseudo types, matched case-insensitively.
const BUILTIN_TYPES: &[&str] = &[
    "string", "int", "float", "bool", "array", "object", "mixed", "callable", "iterable", "null",
    "void", "never", "true", "false",
];

/// Requires `__invoke` parameters of `UseCase` classes to use interfaces.
#[derive(Debug, Clone)]
pub struct UseCaseParameterInterface {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for UseCaseParameterInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl UseCaseParameterInterface {
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

    /// Applies the single-type rule to one type expression, recursing
    /// through nullable wrappers and composite members.
    fn check_type(
        &self,
        class: &ClassDeclaration,
        method: &MethodDeclaration,
        parameter: &ParameterDeclaration,
        type_node: &TypeExpression,
        oracle: &dyn TypeOracle,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        match type_node {
            TypeExpression::Simple(name) => {
                self.check_named_type(class, method, parameter, name, oracle, diagnostics);
            }
            // Nullability itself never triggers a violation.
            TypeExpression::Nullable(inner) => {
                self.check_type(class, method, parameter, inner, oracle, diagnostics);
            }
            // Each offending member is independently actionable.
            TypeExpression::Union(members) | TypeExpression::Intersection(members) => {
                for member in members {
                    self.check_type(class, method, parameter, member, oracle, diagnostics);
                }
            }
        }
    }

    fn check_named_type(
        &self,
        class: &ClassDeclaration,
        method: &MethodDeclaration,
        parameter: &ParameterDeclaration,
        name: &str,
        oracle: &dyn TypeOracle,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if is_builtin(name) {
            return;
        }

        let qualified = oracle.resolve_to_qualified_name(name, class.namespace.as_deref());
        if !oracle.exists(&qualified) {
            // Unknown symbols are exempt; we cannot prove a violation.
            return;
        }
        if oracle.is_interface(&qualified) {
            return;
        }

        let display = parameter
            .variable_name
            .as_deref()
            .map_or_else(|| "(unknown)".to_string(), |n| format!("${n}"));

        diagnostics.push(Diagnostic::new(
            IDENTIFIER,
            format!(
                "UseCase \"{}\" parameter {display} must use an interface, not concrete class \"{qualified}\".",
                class.name
            ),
            method.start_line,
            self.severity,
        ));
    }
}

fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.iter().any(|b| b.eq_ignore_ascii_case(name))
}

impl ClassRule for UseCaseParameterInterface {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires UseCase __invoke parameters to be typed against interfaces"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, class: &ClassDeclaration, oracle: &dyn TypeOracle) -> Vec<Diagnostic> {
        if !class.name.ends_with(USE_CASE_SUFFIX) || class.is_abstract {
            return Vec::new();
        }

        // A missing __invoke is the invoke-presence rule's finding, not ours.
        let Some(invoke) = class.find_method(INVOKE_METHOD) else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for parameter in &invoke.parameters {
            if let Some(type_node) = &parameter.type_node {
                self.check_type(class, invoke, parameter, type_node, oracle, &mut diagnostics);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standards_lint_core::SymbolTable;

    fn oracle() -> SymbolTable {
        SymbolTable::new()
            .interface("App\\Dto\\CustomerDataInterface")
            .class("App\\Dto\\CustomerData")
            .class("ConcreteDto")
    }

    fn use_case(parameters: Vec<ParameterDeclaration>) -> ClassDeclaration {
        let mut invoke = MethodDeclaration::new(INVOKE_METHOD, 12);
        invoke.parameters = parameters;
        ClassDeclaration::new("FooUseCase", 8).with_method(invoke)
    }

    fn check(class: &ClassDeclaration) -> Vec<Diagnostic> {
        UseCaseParameterInterface::new().check(class, &oracle())
    }

    #[test]
    fn scalars_are_exempt() {
        let class = use_case(vec![
            ParameterDeclaration::new("a", TypeExpression::simple("string")),
            ParameterDeclaration::new("b", TypeExpression::simple("int")),
        ]);
        assert!(check(&class).is_empty());
    }

    #[test]
    fn builtin_match_is_case_insensitive() {
        let class = use_case(vec![ParameterDeclaration::new(
            "flag",
            TypeExpression::simple("Bool"),
        )]);
        assert!(check(&class).is_empty());
    }

    #[test]
    fn untyped_parameters_are_skipped() {
        let class = use_case(vec![ParameterDeclaration::untyped("raw")]);
        assert!(check(&class).is_empty());
    }

    #[test]
    fn interface_parameter_passes() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::simple("\\App\\Dto\\CustomerDataInterface"),
        )]);
        assert!(check(&class).is_empty());
    }

    #[test]
    fn unknown_type_is_exempt() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::simple("Vendor\\Unindexed"),
        )]);
        assert!(check(&class).is_empty());
    }

    #[test]
    fn concrete_class_is_flagged() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::simple("ConcreteDto"),
        )]);

        let diagnostics = check(&class);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].identifier, IDENTIFIER);
        assert_eq!(diagnostics[0].line, 12);
        assert_eq!(
            diagnostics[0].message,
            "UseCase \"FooUseCase\" parameter $dto must use an interface, not concrete class \"ConcreteDto\"."
        );
    }

    #[test]
    fn namespace_resolution_uses_enclosing_namespace() {
        let mut invoke = MethodDeclaration::new(INVOKE_METHOD, 12);
        invoke.parameters = vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::simple("CustomerData"),
        )];
        let class = ClassDeclaration::new("FooUseCase", 8)
            .with_namespace("App\\Dto")
            .with_method(invoke);

        let diagnostics = check(&class);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"App\\Dto\\CustomerData\""));
    }

    #[test]
    fn nullable_does_not_exempt() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::nullable(TypeExpression::simple("ConcreteDto")),
        )]);
        assert_eq!(check(&class).len(), 1);
    }

    #[test]
    fn union_flags_only_offending_members() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::Union(vec![
                TypeExpression::simple("ConcreteDto"),
                TypeExpression::simple("\\App\\Dto\\CustomerDataInterface"),
            ]),
        )]);

        let diagnostics = check(&class);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"ConcreteDto\""));
    }

    #[test]
    fn union_emits_one_diagnostic_per_offending_member() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::Union(vec![
                TypeExpression::simple("ConcreteDto"),
                TypeExpression::simple("\\App\\Dto\\CustomerData"),
            ]),
        )]);
        assert_eq!(check(&class).len(), 2);
    }

    #[test]
    fn intersection_members_are_checked() {
        let class = use_case(vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::Intersection(vec![
                TypeExpression::simple("\\App\\Dto\\CustomerDataInterface"),
                TypeExpression::simple("ConcreteDto"),
            ]),
        )]);
        assert_eq!(check(&class).len(), 1);
    }

    #[test]
    fn missing_variable_name_uses_placeholder() {
        let class = use_case(vec![ParameterDeclaration::unnamed(TypeExpression::simple(
            "ConcreteDto",
        ))]);

        let diagnostics = check(&class);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("parameter (unknown)"));
    }

    #[test]
    fn class_without_invoke_yields_nothing() {
        let class = ClassDeclaration::new("FooUseCase", 8)
            .with_method(MethodDeclaration::new("execute", 12));
        assert!(check(&class).is_empty());
    }

    #[test]
    fn non_use_case_and_abstract_classes_are_skipped() {
        let mut invoke = MethodDeclaration::new(INVOKE_METHOD, 12);
        invoke.parameters = vec![ParameterDeclaration::new(
            "dto",
            TypeExpression::simple("ConcreteDto"),
        )];

        let service = ClassDeclaration::new("FooService", 8).with_method(invoke.clone());
        assert!(check(&service).is_empty());

        let abstract_use_case = ClassDeclaration::new("FooUseCase", 8)
            .with_abstract(true)
            .with_method(invoke);
        assert!(check(&abstract_use_case).is_empty());
    }
}
