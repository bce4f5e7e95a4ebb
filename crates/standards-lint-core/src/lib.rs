//! # standards-lint-core
//!
//! Core framework for linting PHP class declarations against team coding
//! standards.
//!
//! This crate provides the foundational traits and types for building
//! convention checkers. It includes:
//!
//! - [`ClassDeclaration`] and friends: the immutable declaration model an
//!   external front end supplies
//! - [`TypeOracle`] for symbol existence and inheritance queries, with the
//!   in-memory [`SymbolTable`] implementation
//! - [`ClassRule`] trait for per-class convention rules
//! - [`Engine`] for orchestrating rule execution
//! - [`Diagnostic`] and [`DiagnosticReport`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use standards_lint_core::{Engine, SymbolTable};
//!
//! let engine = Engine::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let report = engine.check_all(&classes, &oracle);
//! report.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod decl;
mod diag;
mod engine;
mod oracle;
mod rule;

pub use config::{Config, ConfigError, RuleConfig};
pub use decl::{
    ClassDeclaration, MethodDeclaration, ParameterDeclaration, TypeExpression, Visibility,
};
pub use diag::{Diagnostic, DiagnosticReport, RenderedDiagnostic, Severity};
pub use engine::{Engine, EngineBuilder};
pub use oracle::{SymbolTable, TypeOracle};
pub use rule::{ClassRule, RuleBox};
