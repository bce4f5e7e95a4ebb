//! Rule-set registry for common configurations.

use crate::{ControllerActionSuffix, UseCaseInvoke, UseCaseParameterInterface};
use standards_lint_core::{Config, RuleBox};

/// Returns all built-in rules, gating the controller rule on the given
/// base controller class.
#[must_use]
pub fn all_rules(base_controller: impl Into<String>) -> Vec<RuleBox> {
    vec![
        Box::new(UseCaseInvoke::new()),
        Box::new(UseCaseParameterInterface::new()),
        Box::new(ControllerActionSuffix::new().base_controller(base_controller)),
    ]
}

/// Returns only the UseCase convention rules.
#[must_use]
pub fn use_case_rules() -> Vec<RuleBox> {
    vec![
        Box::new(UseCaseInvoke::new()),
        Box::new(UseCaseParameterInterface::new()),
    ]
}

/// Builds the full rule set from a [`Config`], reading the controller base
/// class from the `base_controller` option of the controller rule section.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let base_controller = config
        .rules
        .get(crate::controller_action::NAME)
        .map_or(crate::controller_action::DEFAULT_BASE_CONTROLLER, |c| {
            c.get_str(
                "base_controller",
                crate::controller_action::DEFAULT_BASE_CONTROLLER,
            )
        })
        .to_string();

    all_rules(base_controller)
}
