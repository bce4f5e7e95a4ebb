//! Type oracle: the external symbol-resolution capability rules consult.
//!
//! The core never builds a project's type hierarchy itself. Existence,
//! interface-ness, and inheritance questions are delegated to a host-provided
//! [`TypeOracle`]; the shipped [`SymbolTable`] is an in-memory implementation
//! suitable for tests and for hosts that already hold a symbol index.

use std::collections::HashMap;

/// Read-only symbol queries the rules need.
///
/// Implementations must be cheap to query; rules issue at most one
/// resolution per candidate type name and never retry. An oracle that does
/// not know a name degrades the pass to fewer diagnostics, never to an
/// error.
pub trait TypeOracle: Send + Sync {
    /// Whether a class or interface with this canonical name is known.
    fn exists(&self, qualified_name: &str) -> bool;

    /// Whether the known type is an interface.
    ///
    /// Only meaningful when [`exists`](Self::exists) returned `true`; for
    /// unknown names the answer is `false`.
    fn is_interface(&self, qualified_name: &str) -> bool;

    /// Whether `qualified_name` transitively extends or implements
    /// `ancestor`. Not reflexive: a type is not its own subtype.
    fn is_subtype_of(&self, qualified_name: &str, ancestor: &str) -> bool;

    /// Turns a type reference as written in source into the oracle's
    /// canonical key, given the surrounding namespace.
    fn resolve_to_qualified_name(&self, name: &str, namespace: Option<&str>) -> String;
}

/// Kind of a class-like symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolKind {
    Class,
    Interface,
}

#[derive(Debug, Clone)]
struct Symbol {
    kind: SymbolKind,
    /// Direct parents: the `extends` target plus any `implements` entries.
    parents: Vec<String>,
}

/// Ancestor walks stop here; seed data with deeper (or cyclic) chains
/// resolves to "not a subtype" rather than looping.
const MAX_ANCESTRY_DEPTH: usize = 20;

/// In-memory [`TypeOracle`] backed by a seeded symbol map.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a concrete class with no parents.
    #[must_use]
    pub fn class(self, name: impl Into<String>) -> Self {
        self.insert(name.into(), SymbolKind::Class, Vec::new())
    }

    /// Registers a class extending another class.
    #[must_use]
    pub fn class_extending(self, name: impl Into<String>, parent: impl Into<String>) -> Self {
        self.insert(name.into(), SymbolKind::Class, vec![parent.into()])
    }

    /// Registers a class implementing the given interfaces.
    #[must_use]
    pub fn class_implementing<I, S>(self, name: impl Into<String>, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parents = interfaces.into_iter().map(Into::into).collect();
        self.insert(name.into(), SymbolKind::Class, parents)
    }

    /// Registers an interface with no parents.
    #[must_use]
    pub fn interface(self, name: impl Into<String>) -> Self {
        self.insert(name.into(), SymbolKind::Interface, Vec::new())
    }

    /// Registers an interface extending another interface.
    #[must_use]
    pub fn interface_extending(self, name: impl Into<String>, parent: impl Into<String>) -> Self {
        self.insert(name.into(), SymbolKind::Interface, vec![parent.into()])
    }

    fn insert(mut self, name: String, kind: SymbolKind, parents: Vec<String>) -> Self {
        self.symbols.insert(name, Symbol { kind, parents });
        self
    }
}

impl TypeOracle for SymbolTable {
    fn exists(&self, qualified_name: &str) -> bool {
        self.symbols.contains_key(qualified_name)
    }

    fn is_interface(&self, qualified_name: &str) -> bool {
        self.symbols
            .get(qualified_name)
            .is_some_and(|s| s.kind == SymbolKind::Interface)
    }

    fn is_subtype_of(&self, qualified_name: &str, ancestor: &str) -> bool {
        let mut frontier: Vec<&str> = match self.symbols.get(qualified_name) {
            Some(symbol) => symbol.parents.iter().map(String::as_str).collect(),
            None => return false,
        };

        for _ in 0..MAX_ANCESTRY_DEPTH {
            if frontier.is_empty() {
                return false;
            }
            if frontier.iter().any(|p| *p == ancestor) {
                return true;
            }
            frontier = frontier
                .iter()
                .filter_map(|p| self.symbols.get(*p))
                .flat_map(|s| s.parents.iter().map(String::as_str))
                .collect();
        }

        false
    }

    fn resolve_to_qualified_name(&self, name: &str, namespace: Option<&str>) -> String {
        // A leading backslash means the name is already fully qualified.
        if let Some(absolute) = name.strip_prefix('\\') {
            return absolute.to_string();
        }
        // Relative qualified names (`Sub\Type`) and bare names resolve
        // against the enclosing namespace first, then the global scope.
        if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
            let namespaced = format!("{ns}\\{name}");
            if self.symbols.contains_key(&namespaced) {
                return namespaced;
            }
            if self.symbols.contains_key(name) {
                return name.to_string();
            }
            return namespaced;
        }
        name.to_string()
    }
}
