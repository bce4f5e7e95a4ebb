//! End-to-end tests: engine + built-in rules over a small seeded symbol table.

use standards_lint_core::{
    ClassDeclaration, Config, Engine, MethodDeclaration, ParameterDeclaration, Severity,
    SymbolTable, TypeExpression,
};
use standards_lint_rules::{all_rules, configured_rules};

const BASE_CONTROLLER: &str = "App\\Http\\AbstractRestApiController";

fn oracle() -> SymbolTable {
    SymbolTable::new()
        .class(BASE_CONTROLLER)
        .class_extending("App\\Http\\ControllerWithoutActionSuffix", BASE_CONTROLLER)
        .class_extending("App\\Http\\ExternalCustomerController", BASE_CONTROLLER)
        .interface("App\\Dto\\ImportRequestInterface")
        .class("App\\Dto\\ImportRequest")
        .class("App\\UseCase\\ImportCustomersUseCase")
}

fn engine() -> Engine {
    Engine::builder().rules(all_rules(BASE_CONTROLLER)).build()
}

#[test]
fn controller_without_action_suffix_scenario() {
    let class = ClassDeclaration::new("ControllerWithoutActionSuffix", 11)
        .with_namespace("App\\Http")
        .with_method(MethodDeclaration::new("importAllExternalCustomers", 14))
        .with_method(MethodDeclaration::new("externalCustomerLookup", 18));

    let diagnostics = engine().check_class(&class, &oracle());

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|d| d.identifier == "controller.actionMethodSuffix"));
    assert_eq!(diagnostics[0].line, 14);
    assert_eq!(
        diagnostics[0].message,
        "Controller method \"ControllerWithoutActionSuffix::importAllExternalCustomers()\" \
         must have the \"Action\" suffix (e.g. \"importAllExternalCustomersAction\")."
    );
    assert_eq!(diagnostics[1].line, 18);
    assert_eq!(
        diagnostics[1].message,
        "Controller method \"ControllerWithoutActionSuffix::externalCustomerLookup()\" \
         must have the \"Action\" suffix (e.g. \"externalCustomerLookupAction\")."
    );
}

#[test]
fn use_case_rules_compose_on_one_class() {
    // Missing __invoke: only the invoke-presence rule fires.
    let missing_invoke = ClassDeclaration::new("ImportCustomersUseCase", 9)
        .with_namespace("App\\UseCase")
        .with_method(MethodDeclaration::new("execute", 12));

    let diagnostics = engine().check_class(&missing_invoke, &oracle());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].identifier, "useCase.missingInvoke");
    assert_eq!(diagnostics[0].line, 9);

    // Concrete DTO parameter: only the parameter rule fires.
    let mut invoke = MethodDeclaration::new("__invoke", 12);
    invoke.parameters = vec![ParameterDeclaration::new(
        "request",
        TypeExpression::simple("\\App\\Dto\\ImportRequest"),
    )];
    let concrete_param = ClassDeclaration::new("ImportCustomersUseCase", 9)
        .with_namespace("App\\UseCase")
        .with_method(invoke);

    let diagnostics = engine().check_class(&concrete_param, &oracle());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].identifier, "useCase.parameterMustBeInterface");
    assert!(diagnostics[0]
        .message
        .contains("parameter $request must use an interface, not concrete class \"App\\Dto\\ImportRequest\"."));
}

#[test]
fn check_all_aggregates_across_classes() {
    let mut invoke = MethodDeclaration::new("__invoke", 12);
    invoke.parameters = vec![ParameterDeclaration::new(
        "request",
        TypeExpression::simple("\\App\\Dto\\ImportRequestInterface"),
    )];

    let classes = vec![
        // Compliant use case: interface-typed __invoke parameter.
        ClassDeclaration::new("ImportCustomersUseCase", 9)
            .with_namespace("App\\UseCase")
            .with_method(invoke),
        // Controller with one offending and one compliant method.
        ClassDeclaration::new("ExternalCustomerController", 7)
            .with_namespace("App\\Http")
            .with_method(MethodDeclaration::new("lookup", 10))
            .with_method(MethodDeclaration::new("detailAction", 15)),
        // Unrelated class: no rule applies.
        ClassDeclaration::new("CustomerMapper", 4),
    ];

    let report = engine().check_all(&classes, &oracle());
    assert_eq!(report.classes_checked, 3);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].identifier, "controller.actionMethodSuffix");
    assert!(report.has_errors());
}

#[test]
fn configured_rules_respect_config_sections() {
    let config = Config::parse(
        r#"
[rules.use-case-invoke]
enabled = false

[rules.controller-action-suffix]
severity = "warning"
base_controller = "App\\Http\\AbstractRestApiController"
"#,
    )
    .expect("Failed to parse config");

    let engine = Engine::builder()
        .rules(configured_rules(&config))
        .config(config)
        .build();

    let classes = vec![
        // Would trip use-case-invoke, but the rule is disabled.
        ClassDeclaration::new("ImportCustomersUseCase", 9).with_namespace("App\\UseCase"),
        ClassDeclaration::new("ExternalCustomerController", 7)
            .with_namespace("App\\Http")
            .with_method(MethodDeclaration::new("lookup", 10)),
    ];

    let report = engine.check_all(&classes, &oracle());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
    assert!(!report.has_errors());
    assert!(report.has_diagnostics_at(Severity::Warning));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let class = ClassDeclaration::new("ControllerWithoutActionSuffix", 11)
        .with_namespace("App\\Http")
        .with_method(MethodDeclaration::new("importAllExternalCustomers", 14));

    let engine = engine();
    let oracle = oracle();

    let first = engine.check_all(std::slice::from_ref(&class), &oracle);
    let second = engine.check_all(std::slice::from_ref(&class), &oracle);
    assert_eq!(first.format_report(), second.format_report());

    insta::assert_snapshot!(first.format_report(), @r#"
    line 14: error [controller.actionMethodSuffix] Controller method "ControllerWithoutActionSuffix::importAllExternalCustomers()" must have the "Action" suffix (e.g. "importAllExternalCustomersAction").
    Found 1 error(s), 0 warning(s), 0 info(s) in 1 class(es)
    "#);
}
