//! Prefix operator semantics.

use rill_ir::UnaryOp;
use rill_object::{integer_overflow, unknown_prefix_op, EvalError, Value};

/// Evaluate `op operand`.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> Result<Value, EvalError> {
    match op {
        // `!` negates truthiness: only `null` and `false` are falsy, so
        // `!0` is `false`.
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),

        UnaryOp::Neg => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::int)
                .ok_or_else(|| integer_overflow("-")),
            Value::Float(f) => Ok(Value::float(-f)),
            Value::Decimal(d) => Ok(Value::decimal(-(*d).clone())),
            other => Err(unknown_prefix_op(UnaryOp::Neg, other.type_name())),
        },
    }
}
