//! Declaration model for PHP class-like structures.
//!
//! These are passive data types produced by an external front end (a PHP
//! parser) and consumed read-only by rules. Rules never mutate a declaration;
//! every check is a projection from a declaration into zero or more
//! diagnostics.

use serde::{Deserialize, Serialize};

/// Visibility of a class member.
///
/// PHP members without an explicit modifier default to `Public`; the front
/// end is expected to have normalized that before handing us the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Accessible from anywhere.
    Public,
    /// Accessible from the class and its subclasses.
    Protected,
    /// Accessible only from the declaring class.
    Private,
}

/// A declared parameter type, as written in source.
///
/// Modeled as a sum type so rules can match on the shape exhaustively
/// instead of probing with runtime type checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpression {
    /// A bare type name (`string`, `Foo`, `\App\Bar`).
    Simple(String),
    /// A nullable type (`?Foo`).
    Nullable(Box<TypeExpression>),
    /// A union type (`Foo|Bar`), members in source order.
    Union(Vec<TypeExpression>),
    /// An intersection type (`Foo&Bar`), members in source order.
    Intersection(Vec<TypeExpression>),
}

impl TypeExpression {
    /// Convenience constructor for a simple named type.
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple(name.into())
    }

    /// Convenience constructor for a nullable type.
    #[must_use]
    pub fn nullable(inner: TypeExpression) -> Self {
        Self::Nullable(Box::new(inner))
    }
}

/// A single parameter of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    /// The parameter name without the `$` sigil (e.g. `"request"`).
    ///
    /// `None` only for malformed input; rules substitute a placeholder
    /// when rendering such a parameter.
    pub variable_name: Option<String>,
    /// The declared type, or `None` for an untyped parameter.
    pub type_node: Option<TypeExpression>,
}

impl ParameterDeclaration {
    /// Creates a typed parameter.
    #[must_use]
    pub fn new(variable_name: impl Into<String>, type_node: TypeExpression) -> Self {
        Self {
            variable_name: Some(variable_name.into()),
            type_node: Some(type_node),
        }
    }

    /// Creates an untyped parameter.
    #[must_use]
    pub fn untyped(variable_name: impl Into<String>) -> Self {
        Self {
            variable_name: Some(variable_name.into()),
            type_node: None,
        }
    }

    /// Creates a parameter with a type but no usable variable name.
    #[must_use]
    pub fn unnamed(type_node: TypeExpression) -> Self {
        Self {
            variable_name: None,
            type_node: Some(type_node),
        }
    }
}

/// A method of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// The method name (e.g. `"__invoke"`, `"detailAction"`).
    pub name: String,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Whether the method is static.
    pub is_static: bool,
    /// 1-based source line of the method declaration, used verbatim in
    /// diagnostics.
    pub start_line: usize,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterDeclaration>,
}

impl MethodDeclaration {
    /// Creates a public, non-static method with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, start_line: usize) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            start_line,
            parameters: Vec::new(),
        }
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the method as static.
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDeclaration) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A single class declaration as seen by the front end.
///
/// Constructed once per class definition, immutable, and discarded after the
/// rule pass; no cross-class state is retained between declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Simple, unqualified class name (e.g. `"ImportCustomerUseCase"`).
    pub name: String,
    /// Enclosing namespace, if any (e.g. `"App\\UseCase"`).
    pub namespace: Option<String>,
    /// Whether the class is declared `abstract`.
    pub is_abstract: bool,
    /// 1-based source line of the `class` keyword; the anchor for
    /// class-level diagnostics.
    pub start_line: usize,
    /// Methods in declaration order.
    pub methods: Vec<MethodDeclaration>,
}

impl ClassDeclaration {
    /// Creates a concrete, global-namespace class with no methods.
    #[must_use]
    pub fn new(name: impl Into<String>, start_line: usize) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            is_abstract: false,
            start_line,
            methods: Vec::new(),
        }
    }

    /// Sets the enclosing namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Marks the class as abstract.
    #[must_use]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Appends a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    /// Finds the first method with the given name, in declaration order.
    #[must_use]
    pub fn find_method(&self, name: &str) -> Option<&MethodDeclaration> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_method_order() {
        let class = ClassDeclaration::new("Foo", 3)
            .with_method(MethodDeclaration::new("b", 5))
            .with_method(MethodDeclaration::new("a", 9));

        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn find_method_returns_first_match() {
        let class = ClassDeclaration::new("Foo", 1)
            .with_method(MethodDeclaration::new("__invoke", 4))
            .with_method(MethodDeclaration::new("__invoke", 8));

        let found = class.find_method("__invoke");
        assert_eq!(found.map(|m| m.start_line), Some(4));
        assert!(class.find_method("missing").is_none());
    }

    #[test]
    fn parameter_constructors() {
        let typed = ParameterDeclaration::new("dto", TypeExpression::simple("Foo"));
        assert_eq!(typed.variable_name.as_deref(), Some("dto"));
        assert!(typed.type_node.is_some());

        let untyped = ParameterDeclaration::untyped("raw");
        assert!(untyped.type_node.is_none());

        let unnamed = ParameterDeclaration::unnamed(TypeExpression::simple("Foo"));
        assert!(unnamed.variable_name.is_none());
    }
}
