//! Error and control-flow types for evaluation.
//!
//! Evaluation threads a `Result` everywhere: the `Err` channel carries
//! both genuine runtime errors and the `return` unwind signal. Because
//! sentinels travel on the error channel, they can never be stored into a
//! scope, array or hash.
//!
//! Factory functions (e.g. [`division_by_zero`]) populate both the typed
//! `kind` and the user-visible `message`.

use std::fmt;

use rill_ir::{BinaryOp, Span, UnaryOp};

use super::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Control-flow signal carried on the error channel.
///
/// Not an error: propagated up to the nearest handler (a function-call
/// boundary or the top of the program), where the payload becomes the
/// result.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// `return <value>` unwinding toward the nearest call boundary.
    Return(Value),
}

/// Typed error category.
///
/// Carries the structured data for each failure; the `Display` impl
/// produces the exact user-visible message text.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Operators
    TypeMismatch {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    UnknownInfixOp {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    UnknownPrefixOp {
        op: UnaryOp,
        operand: &'static str,
    },
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        op: &'static str,
    },

    // Resolution and calls
    IdentifierNotFound {
        name: String,
    },
    NotAFunction {
        type_name: &'static str,
    },
    ArityMismatch {
        want: usize,
        got: usize,
    },

    // Collections
    UnusableHashKey {
        type_name: &'static str,
    },
    IndexNotSupported {
        type_name: &'static str,
    },

    // Recovery
    MalformedExpression,

    /// Free-form message; used by the builtin library and for the
    /// `return` carrier.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            }
            Self::UnknownInfixOp { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            }
            Self::UnknownPrefixOp { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { op } => write!(f, "integer overflow in {op}"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::ArityMismatch { want, got } => {
                write!(f, "wrong number of arguments: want={want}, got={got}")
            }
            Self::UnusableHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            }
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            }
            Self::MalformedExpression => {
                write!(f, "cannot evaluate malformed expression")
            }
            Self::Custom { message } => f.write_str(message),
        }
    }
}

/// Evaluation error (or control-flow carrier).
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Human-readable message; for factory-created errors this equals
    /// `kind.to_string()`.
    pub message: String,
    /// Present when this is a control-flow signal, not a failure.
    pub control_flow: Option<ControlFlow>,
    /// Source location, where known.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            control_flow: None,
            span: None,
        }
    }

    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            control_flow: None,
            span: None,
        }
    }

    /// Create a `return` signal carrying `value`.
    pub fn return_with(value: Value) -> Self {
        Self {
            kind: EvalErrorKind::Custom {
                message: "return outside function".to_string(),
            },
            message: "return outside function".to_string(),
            control_flow: Some(ControlFlow::Return(value)),
            span: None,
        }
    }

    /// Attach a source span if none is present yet.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// True for genuine errors (not control-flow signals).
    pub fn is_error(&self) -> bool {
        self.control_flow.is_none()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// `type mismatch: <L> <op> <R>` - operands of incompatible types.
pub fn type_mismatch(left: &'static str, op: BinaryOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { left, op, right })
}

/// `unknown operator: <L> <op> <R>` - same-type operands, unsupported
/// operator.
pub fn unknown_infix_op(left: &'static str, op: BinaryOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOp { left, op, right })
}

/// `unknown operator: <op><T>`
pub fn unknown_prefix_op(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOp { op, operand })
}

/// `division by zero`
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// `modulo by zero`
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// `integer overflow in <op>`
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

/// `identifier not found: <name>`
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

/// `not a function: <TYPE>`
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { type_name })
}

/// `wrong number of arguments: want=<N>, got=<M>`
pub fn wrong_arg_count(want: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { want, got })
}

/// `unusable as hash key: <TYPE>`
pub fn unusable_hash_key(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnusableHashKey { type_name })
}

/// `index operator not supported: <TYPE>`
pub fn index_not_supported(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported { type_name })
}

/// Evaluation reached a parser recovery placeholder.
pub fn malformed_expression() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedExpression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_messages() {
        assert_eq!(
            type_mismatch("INTEGER", BinaryOp::Add, "BOOLEAN").message,
            "type mismatch: INTEGER + BOOLEAN"
        );
        assert_eq!(
            unknown_infix_op("BOOLEAN", BinaryOp::Add, "BOOLEAN").message,
            "unknown operator: BOOLEAN + BOOLEAN"
        );
        assert_eq!(
            identifier_not_found("foobar").message,
            "identifier not found: foobar"
        );
        assert_eq!(division_by_zero().message, "division by zero");
    }

    #[test]
    fn return_signal_is_not_an_error() {
        let signal = EvalError::return_with(Value::int(5));
        assert!(!signal.is_error());
        assert_eq!(
            signal.control_flow,
            Some(ControlFlow::Return(Value::int(5)))
        );
    }
}
