//! Runtime values for the Rill interpreter.
//!
//! # Ownership
//!
//! Primitives are stored inline. Strings and decimals use [`Heap`]
//! (immutable sharing); arrays and hashes use [`Shared`] (one underlying
//! store, mutated in place through any handle). Construction of heap
//! payloads goes through the factory methods below.

use std::fmt;

use bigdecimal::BigDecimal;
use rustc_hash::FxHashMap;

use rill_ir::{BlockId, Name, SharedArena, StringInterner};

use super::{BuiltinDef, HashKey, HashPair, Heap, Shared, SharedScope};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value. Falsy.
    Null,
    /// Boolean. `false` is falsy.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit IEEE float.
    Float(f64),
    /// Arbitrary-precision signed decimal.
    Decimal(Heap<BigDecimal>),
    /// Immutable text.
    Str(Heap<String>),
    /// Ordered, mutable, zero-indexed sequence. The handle is the
    /// identity: push/pop mutate the one underlying store.
    Array(Shared<Vec<Value>>),
    /// Mapping from hashable keys to values.
    Hash(Shared<FxHashMap<HashKey, HashPair>>),
    /// User function (closure).
    Function(FunctionValue),
    /// Native function from the builtin table.
    Builtin(&'static BuiltinDef),
}

/// Function value: parameter list, body, and the captured context.
///
/// The defining scope is captured by shared handle - never copied - so
/// bindings added to it after capture stay visible, and two closures over
/// one scope observe each other's view. The arena handle keeps the body's
/// nodes alive for as long as the closure is.
#[derive(Clone)]
pub struct FunctionValue {
    pub params: Vec<Name>,
    pub body: BlockId,
    pub arena: SharedArena,
    pub scope: SharedScope,
}

impl FunctionValue {
    /// Identity comparison: same definition evaluated in the same scope.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        self.body == other.body && self.arena.ptr_eq(&other.arena) && self.scope.ptr_eq(&other.scope)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({} params, {:?})", self.params.len(), self.body)
    }
}

// Factory methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a decimal value.
    #[inline]
    pub fn decimal(d: BigDecimal) -> Self {
        Value::Decimal(Heap::new(d))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an array value with fresh underlying storage.
    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Shared::new(elements))
    }

    /// Create a hash value with fresh underlying storage.
    #[inline]
    pub fn hash(pairs: FxHashMap<HashKey, HashPair>) -> Self {
        Value::Hash(Shared::new(pairs))
    }

    /// Create a function value.
    pub fn function(
        params: Vec<Name>,
        body: BlockId,
        arena: SharedArena,
        scope: SharedScope,
    ) -> Self {
        Value::Function(FunctionValue {
            params,
            body,
            arena,
            scope,
        })
    }
}

// Introspection

impl Value {
    /// Type name used in error messages and by the `typeof` builtin.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Decimal(_) => "DECIMAL",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// Truthiness: `null` and `false` are falsy, everything else - the
    /// number zero and the empty string included - is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Render the value for display.
    ///
    /// Needs the interner because function parameters are interned names.
    pub fn inspect(&self, interner: &StringInterner) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::Str(s) => (**s).clone(),
            Value::Array(elements) => {
                let inner: Vec<String> = elements
                    .borrow()
                    .iter()
                    .map(|e| e.inspect(interner))
                    .collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Hash(pairs) => {
                let inner: Vec<String> = pairs
                    .borrow()
                    .values()
                    .map(|pair| {
                        format!(
                            "{}: {}",
                            pair.key.inspect(interner),
                            pair.value.inspect(interner)
                        )
                    })
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Value::Function(func) => {
                let params: Vec<&str> =
                    func.params.iter().map(|p| interner.lookup(*p)).collect();
                format!("fn({}) {{ ... }}", params.join(", "))
            }
            Value::Builtin(def) => format!("builtin function {}", def.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Decimal(d) => write!(f, "Decimal({})", &**d),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(elements) => write!(f, "Array({:?})", &*elements.borrow()),
            Value::Hash(pairs) => write!(f, "Hash({} entries)", pairs.borrow().len()),
            Value::Function(func) => func.fmt(f),
            Value::Builtin(def) => write!(f, "Builtin({})", def.name),
        }
    }
}

/// Structural equality, for tests and host-side assertions.
///
/// Language-level `==` lives in the evaluator's operator table (numeric
/// promotion, identity for composites); this impl compares contents so
/// test expectations read naturally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.ptr_eq(b) || *a.borrow() == *b.borrow()
            }
            (Value::Hash(a), Value::Hash(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}
