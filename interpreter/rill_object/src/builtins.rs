//! The native built-in function table.
//!
//! A process-wide, read-only registry: definitions are `static`, built
//! once, never mutated. Self-contained entries carry their implementation
//! as a plain `fn`; `logs` and `input` are marked [`BuiltinImpl::Io`] and
//! dispatched by the interpreter, which owns the process I/O handlers.
//!
//! Every entry validates its own argument count and types and reports
//! violations as error values - never by aborting the host.

use bigdecimal::BigDecimal;

use super::{EvalError, Value};

/// A self-contained builtin implementation.
pub type PureBuiltin = fn(&[Value]) -> Result<Value, EvalError>;

/// How a builtin is dispatched.
pub enum BuiltinImpl {
    /// Computed from the arguments alone.
    Pure(PureBuiltin),
    /// Needs process I/O; handled by the interpreter.
    Io(IoBuiltin),
}

/// The builtins that touch process I/O.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IoBuiltin {
    /// Print each argument's display form, quoting strings.
    Logs,
    /// Optional prompt, then read one line from input.
    Input,
}

/// A builtin table entry.
pub struct BuiltinDef {
    pub name: &'static str,
    pub description: &'static str,
    pub imp: BuiltinImpl,
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinDef({})", self.name)
    }
}

/// The builtin table.
pub static BUILTINS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "len",
        description: "Returns the length of a string or an array",
        imp: BuiltinImpl::Pure(builtin_len),
    },
    BuiltinDef {
        name: "first",
        description: "Returns the first element of an array",
        imp: BuiltinImpl::Pure(builtin_first),
    },
    BuiltinDef {
        name: "last",
        description: "Returns the last element of an array",
        imp: BuiltinImpl::Pure(builtin_last),
    },
    BuiltinDef {
        name: "skipFirst",
        description: "Returns an array with the first element removed",
        imp: BuiltinImpl::Pure(builtin_skip_first),
    },
    BuiltinDef {
        name: "skipLast",
        description: "Returns an array with the last element removed",
        imp: BuiltinImpl::Pure(builtin_skip_last),
    },
    BuiltinDef {
        name: "push",
        description: "Pushes an element to the end of an array",
        imp: BuiltinImpl::Pure(builtin_push),
    },
    BuiltinDef {
        name: "pop",
        description: "Removes the last element of an array",
        imp: BuiltinImpl::Pure(builtin_pop),
    },
    BuiltinDef {
        name: "range",
        description: "Returns an array of integers in the given range",
        imp: BuiltinImpl::Pure(builtin_range),
    },
    BuiltinDef {
        name: "decimal",
        description: "Converts an integer or float to a decimal",
        imp: BuiltinImpl::Pure(builtin_decimal),
    },
    BuiltinDef {
        name: "typeof",
        description: "Returns the type of the given value",
        imp: BuiltinImpl::Pure(builtin_typeof),
    },
    BuiltinDef {
        name: "copy",
        description: "Returns a shallow copy of the given value",
        imp: BuiltinImpl::Pure(builtin_copy),
    },
    BuiltinDef {
        name: "logs",
        description: "Prints the result to the console",
        imp: BuiltinImpl::Io(IoBuiltin::Logs),
    },
    BuiltinDef {
        name: "input",
        description: "Reads a line from the standard input",
        imp: BuiltinImpl::Io(IoBuiltin::Input),
    },
];

/// Find a builtin by name.
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTINS.iter().find(|def| def.name == name)
}

fn builtin_len(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::new(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        )));
    }
    match &args[0] {
        Value::Str(s) => Ok(Value::int(s.chars().count() as i64)),
        Value::Array(elements) => Ok(Value::int(elements.borrow().len() as i64)),
        other => Err(EvalError::new(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        ))),
    }
}

/// Check arity and extract the sole array argument shared by the
/// first/last/skip/pop family.
fn expect_array_arg<'a>(
    args: &'a [Value],
    builtin: &str,
) -> Result<&'a super::Shared<Vec<Value>>, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to {builtin}(). got={}, want=1",
            args.len()
        )));
    }
    match &args[0] {
        Value::Array(elements) => Ok(elements),
        other => Err(EvalError::new(format!(
            "argument to `{builtin}` must be ARRAY, got {}",
            other.type_name()
        ))),
    }
}

fn builtin_first(args: &[Value]) -> Result<Value, EvalError> {
    let elements = expect_array_arg(args, "first")?;
    Ok(elements.borrow().first().cloned().unwrap_or(Value::Null))
}

fn builtin_last(args: &[Value]) -> Result<Value, EvalError> {
    let elements = expect_array_arg(args, "last")?;
    Ok(elements.borrow().last().cloned().unwrap_or(Value::Null))
}

fn builtin_skip_first(args: &[Value]) -> Result<Value, EvalError> {
    let elements = expect_array_arg(args, "skipFirst")?;
    let elements = elements.borrow();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::array(elements[1..].to_vec()))
}

fn builtin_skip_last(args: &[Value]) -> Result<Value, EvalError> {
    let elements = expect_array_arg(args, "skipLast")?;
    let elements = elements.borrow();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::array(elements[..elements.len() - 1].to_vec()))
}

fn builtin_push(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to push(). got={}, want=2",
            args.len()
        )));
    }
    match &args[0] {
        Value::Array(elements) => {
            elements.borrow_mut().push(args[1].clone());
            // Same underlying storage handle: aliases observe the push.
            Ok(args[0].clone())
        }
        other => Err(EvalError::new(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        ))),
    }
}

fn builtin_pop(args: &[Value]) -> Result<Value, EvalError> {
    let elements = expect_array_arg(args, "pop")?;
    if elements.borrow().is_empty() {
        return Ok(Value::Null);
    }
    elements.borrow_mut().pop();
    Ok(args[0].clone())
}

fn builtin_range(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() || args.len() > 2 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to range(). got={}, want=2",
            args.len()
        )));
    }

    let bounds = match args {
        [Value::Int(to)] => (0, *to),
        [Value::Int(from), Value::Int(to)] => (*from, *to),
        _ => return Err(EvalError::new("argument to `range` must be INTEGER")),
    };

    // Exclusive upper bound; an empty or inverted range is an empty array.
    let (from, to) = bounds;
    let elements: Vec<Value> = (from..to).map(Value::int).collect();
    Ok(Value::array(elements))
}

fn builtin_decimal(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to decimal(). got={}, want=1",
            args.len()
        )));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::decimal(BigDecimal::from(*n))),
        Value::Float(f) => float_to_decimal(*f).map(Value::decimal),
        other => Err(EvalError::new(format!(
            "argument to `decimal` not supported, got {}",
            other.type_name()
        ))),
    }
}

/// Convert a float through its shortest round-trip decimal form, so
/// `decimal(0.1)` is exactly `0.1` rather than the float's full binary
/// expansion. NaN and infinities are not representable.
pub fn float_to_decimal(f: f64) -> Result<BigDecimal, EvalError> {
    f.to_string()
        .parse::<BigDecimal>()
        .map_err(|_| EvalError::new(format!("cannot convert {f} to DECIMAL")))
}

fn builtin_typeof(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to typeof(). got={}, want=1",
            args.len()
        )));
    }
    Ok(Value::string(args[0].type_name()))
}

fn builtin_copy(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::new(format!(
            "wrong number of arguments passed to copy(). got={}, want=1",
            args.len()
        )));
    }
    match &args[0] {
        // Shallow: fresh container, elements still shared.
        Value::Array(elements) => Ok(Value::array(elements.borrow().clone())),
        Value::Hash(pairs) => Ok(Value::hash(pairs.borrow().clone())),
        Value::Str(s) => Ok(Value::string((**s).clone())),
        other => Err(EvalError::new(format!(
            "argument to `copy` not supported, got {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_names_are_unique() {
        for (i, def) in BUILTINS.iter().enumerate() {
            for other in &BUILTINS[i + 1..] {
                assert_ne!(def.name, other.name);
            }
        }
    }

    #[test]
    fn lookup_finds_every_entry() {
        for def in BUILTINS {
            assert!(lookup_builtin(def.name).is_some());
        }
        assert!(lookup_builtin("missing").is_none());
    }

    #[test]
    fn len_counts_characters_and_elements() {
        assert_eq!(
            builtin_len(&[Value::string("hello")]),
            Ok(Value::int(5))
        );
        assert_eq!(
            builtin_len(&[Value::array(vec![Value::int(1), Value::int(2)])]),
            Ok(Value::int(2))
        );
    }

    #[test]
    fn len_rejects_unsupported_types() {
        let err = builtin_len(&[Value::int(1)]).unwrap_err();
        assert_eq!(err.message, "argument to `len` not supported, got INTEGER");

        let err = builtin_len(&[]).unwrap_err();
        assert_eq!(err.message, "wrong number of arguments. got=0, want=1");
    }

    #[test]
    fn first_and_last() {
        let arr = Value::array(vec![Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(builtin_first(&[arr.clone()]), Ok(Value::int(1)));
        assert_eq!(builtin_last(&[arr]), Ok(Value::int(3)));

        let empty = Value::array(vec![]);
        assert_eq!(builtin_first(&[empty.clone()]), Ok(Value::Null));
        assert_eq!(builtin_last(&[empty]), Ok(Value::Null));
    }

    #[test]
    fn skip_first_and_skip_last_preserve_order() {
        let arr = Value::array(vec![Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(
            builtin_skip_first(&[arr.clone()]),
            Ok(Value::array(vec![Value::int(2), Value::int(3)]))
        );
        assert_eq!(
            builtin_skip_last(&[arr]),
            Ok(Value::array(vec![Value::int(1), Value::int(2)]))
        );

        let empty = Value::array(vec![]);
        assert_eq!(builtin_skip_first(&[empty.clone()]), Ok(Value::Null));
        assert_eq!(builtin_skip_last(&[empty]), Ok(Value::Null));
    }

    #[test]
    fn push_mutates_in_place_and_returns_the_same_array() {
        let arr = Value::array(vec![Value::int(1)]);
        let result = builtin_push(&[arr.clone(), Value::int(2)]).unwrap();

        let (Value::Array(original), Value::Array(returned)) = (&arr, &result) else {
            panic!("expected arrays");
        };
        assert!(original.ptr_eq(returned));
        assert_eq!(original.borrow().len(), 2);
    }

    #[test]
    fn pop_removes_last_in_place() {
        let arr = Value::array(vec![Value::int(1), Value::int(2)]);
        let result = builtin_pop(&[arr.clone()]).unwrap();
        assert_eq!(result, arr);

        let Value::Array(elements) = &arr else {
            panic!("expected array");
        };
        assert_eq!(*elements.borrow(), vec![Value::int(1)]);

        assert_eq!(builtin_pop(&[Value::array(vec![])]), Ok(Value::Null));
    }

    #[test]
    fn range_produces_ascending_integers() {
        assert_eq!(
            builtin_range(&[Value::int(3)]),
            Ok(Value::array(vec![
                Value::int(0),
                Value::int(1),
                Value::int(2)
            ]))
        );
        assert_eq!(
            builtin_range(&[Value::int(2), Value::int(5)]),
            Ok(Value::array(vec![
                Value::int(2),
                Value::int(3),
                Value::int(4)
            ]))
        );
        // Inverted bounds are an empty range, not an error.
        assert_eq!(
            builtin_range(&[Value::int(5), Value::int(2)]),
            Ok(Value::array(vec![]))
        );
    }

    #[test]
    fn range_rejects_non_integers() {
        let err = builtin_range(&[Value::string("3")]).unwrap_err();
        assert_eq!(err.message, "argument to `range` must be INTEGER");

        let err = builtin_range(&[]).unwrap_err();
        assert_eq!(
            err.message,
            "wrong number of arguments passed to range(). got=0, want=2"
        );
    }

    #[test]
    fn decimal_conversion_is_exact() {
        let d = builtin_decimal(&[Value::int(7)]).unwrap();
        assert_eq!(d, Value::decimal(BigDecimal::from(7)));

        // Shortest round-trip form, not the binary expansion.
        let d = builtin_decimal(&[Value::float(0.1)]).unwrap();
        assert_eq!(d, Value::decimal("0.1".parse().unwrap()));

        let err = builtin_decimal(&[Value::float(f64::NAN)]).unwrap_err();
        assert!(err.message.contains("cannot convert"));

        let err = builtin_decimal(&[Value::string("1")]).unwrap_err();
        assert_eq!(
            err.message,
            "argument to `decimal` not supported, got STRING"
        );
    }

    #[test]
    fn typeof_reports_runtime_type_names() {
        assert_eq!(
            builtin_typeof(&[Value::int(1)]),
            Ok(Value::string("INTEGER"))
        );
        assert_eq!(
            builtin_typeof(&[Value::Null]),
            Ok(Value::string("NULL"))
        );
    }

    #[test]
    fn copy_is_shallow() {
        let inner = Value::array(vec![Value::int(1)]);
        let outer = Value::array(vec![inner.clone()]);
        let copied = builtin_copy(&[outer.clone()]).unwrap();

        let (Value::Array(a), Value::Array(b)) = (&outer, &copied) else {
            panic!("expected arrays");
        };
        // Fresh container...
        assert!(!a.ptr_eq(b));

        // ...but shared elements: mutating the inner array shows through
        // both.
        let Value::Array(inner_elements) = &inner else {
            panic!("expected array");
        };
        inner_elements.borrow_mut().push(Value::int(2));
        assert_eq!(b.borrow()[0], Value::array(vec![Value::int(1), Value::int(2)]));
    }
}
