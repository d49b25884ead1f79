//! Lexical scopes.
//!
//! A scope is a mutable name->value table plus an optional shared handle
//! to its enclosing scope. Closures capture their defining scope by
//! handle; the chain is reference-counted, so a scope lives as long as
//! its longest-lived holder.

use rustc_hash::FxHashMap;

use rill_ir::Name;

use super::{Shared, Value};

/// Shared handle to a scope. This is what closures capture and what the
/// evaluator threads through evaluation.
pub type SharedScope = Shared<Scope>;

/// A single scope containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    /// Variable bindings in this scope.
    bindings: FxHashMap<Name, Value>,
    /// Enclosing scope, if any.
    parent: Option<SharedScope>,
}

impl Scope {
    /// Create a root scope with no parent.
    pub fn root() -> SharedScope {
        Shared::new(Scope {
            bindings: FxHashMap::default(),
            parent: None,
        })
    }

    /// Define a binding in this scope, shadowing any outer binding of the
    /// same name. `let` always writes the innermost scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name, walking outward through the parent chain.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }
}

impl Shared<Scope> {
    /// Create a child scope enclosed by `self`.
    ///
    /// Used for if-arms (so block-local bindings don't leak) and for
    /// function calls (parameters bound against the captured scope).
    #[must_use]
    pub fn child(&self) -> SharedScope {
        Shared::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        })
    }

    /// Define a binding in this scope.
    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.borrow_mut().define(name, value);
    }

    /// Look up a name through the chain starting here.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.borrow().lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_ir::StringInterner;

    #[test]
    fn lookup_walks_outward() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");

        let root = Scope::root();
        root.define(x, Value::int(1));

        let child = root.child();
        child.define(y, Value::int(2));

        assert_eq!(child.lookup(x), Some(Value::int(1)));
        assert_eq!(child.lookup(y), Some(Value::int(2)));
        assert_eq!(root.lookup(y), None);
    }

    #[test]
    fn define_shadows_in_innermost_scope() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let root = Scope::root();
        root.define(x, Value::int(1));

        let child = root.child();
        child.define(x, Value::int(2));

        assert_eq!(child.lookup(x), Some(Value::int(2)));
        // The outer binding is untouched.
        assert_eq!(root.lookup(x), Some(Value::int(1)));
    }

    #[test]
    fn late_outer_bindings_are_visible_through_captured_handles() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let root = Scope::root();
        let captured = root.child();

        // Binding added after the child was captured.
        root.define(x, Value::int(7));
        assert_eq!(captured.lookup(x), Some(Value::int(7)));
    }
}
