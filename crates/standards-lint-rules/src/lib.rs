//! # standards-lint-rules
//!
//! Built-in convention rules for standards-lint:
//!
//! - [`UseCaseInvoke`] - `UseCase` classes must declare `__invoke`
//! - [`UseCaseParameterInterface`] - `__invoke` parameters must be typed
//!   against interfaces, not concrete classes
//! - [`ControllerActionSuffix`] - public REST controller endpoint methods
//!   must carry the `Action` suffix
//!
//! Each rule implements [`standards_lint_core::ClassRule`] and is registered
//! with an engine either directly or through the [`presets`] registry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod controller_action;
pub mod presets;
pub mod use_case_invoke;
pub mod use_case_parameter;

pub use controller_action::ControllerActionSuffix;
pub use presets::{all_rules, configured_rules, use_case_rules};
pub use use_case_invoke::UseCaseInvoke;
pub use use_case_parameter::UseCaseParameterInterface;
