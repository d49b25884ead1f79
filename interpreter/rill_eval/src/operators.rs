//! Binary operator semantics.
//!
//! Pure value-level evaluation: the interpreter evaluates both operands
//! (short-circuiting `&&`/`||` itself, before ever reaching this module)
//! and delegates here.
//!
//! Numeric promotion tower: `Int (+) Int -> Int`; any `Decimal` operand
//! promotes a numeric pair to exact decimal arithmetic; otherwise any
//! `Float` operand promotes the pair to float.

use bigdecimal::{BigDecimal, Zero};

use rill_ir::BinaryOp;
use rill_object::{
    division_by_zero, float_to_decimal, integer_overflow, modulo_by_zero, type_mismatch,
    unknown_infix_op, EvalError, Value,
};

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalError> {
    debug_assert!(
        !matches!(op, BinaryOp::And | BinaryOp::Or),
        "logical operators short-circuit in the interpreter"
    );

    match (left, right) {
        (Value::Int(l), Value::Int(r)) => int_binary(l, r, op),

        (l, r) if decimal_pair(&l, &r) => {
            let ld = to_decimal(&l)?;
            let rd = to_decimal(&r)?;
            decimal_binary(&ld, &rd, op)
        }

        (l, r) if is_numeric(&l) && is_numeric(&r) => float_binary(to_f64(&l), to_f64(&r), op),

        (Value::Str(l), Value::Str(r)) => match op {
            BinaryOp::Add => Ok(Value::string(format!("{}{}", &*l, &*r))),
            BinaryOp::Eq => Ok(Value::Bool(l == r)),
            BinaryOp::NotEq => Ok(Value::Bool(l != r)),
            _ => Err(unknown_infix_op("STRING", op, "STRING")),
        },

        (Value::Bool(l), Value::Bool(r)) => match op {
            BinaryOp::Eq => Ok(Value::Bool(l == r)),
            BinaryOp::NotEq => Ok(Value::Bool(l != r)),
            _ => Err(unknown_infix_op("BOOLEAN", op, "BOOLEAN")),
        },

        (Value::Null, Value::Null) => match op {
            BinaryOp::Eq => Ok(Value::Bool(true)),
            BinaryOp::NotEq => Ok(Value::Bool(false)),
            _ => Err(unknown_infix_op("NULL", op, "NULL")),
        },

        (l, r) => {
            let same_type = std::mem::discriminant(&l) == std::mem::discriminant(&r);
            match op {
                // Equality never errors: identity for composites, and
                // values of unrelated types are simply unequal.
                BinaryOp::Eq => Ok(Value::Bool(identical(&l, &r))),
                BinaryOp::NotEq => Ok(Value::Bool(!identical(&l, &r))),
                _ if same_type => Err(unknown_infix_op(l.type_name(), op, r.type_name())),
                _ => Err(type_mismatch(l.type_name(), op, r.type_name())),
            }
        }
    }
}

/// Is the value part of the numeric tower?
fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Float(_) | Value::Decimal(_))
}

/// Does this numeric pair promote to decimal?
fn decimal_pair(l: &Value, r: &Value) -> bool {
    (matches!(l, Value::Decimal(_)) && is_numeric(r))
        || (is_numeric(l) && matches!(r, Value::Decimal(_)))
}

/// Promote a numeric operand to decimal.
///
/// Floats go through their shortest round-trip decimal form; NaN and
/// infinities are not representable and error out.
fn to_decimal(value: &Value) -> Result<BigDecimal, EvalError> {
    match value {
        Value::Int(n) => Ok(BigDecimal::from(*n)),
        Value::Float(f) => float_to_decimal(*f),
        Value::Decimal(d) => Ok((**d).clone()),
        other => unreachable!("non-numeric operand {} in decimal promotion", other.type_name()),
    }
}

/// Promote a numeric operand to float. Callers guarantee no decimals.
#[expect(clippy::cast_precision_loss, reason = "int-to-float promotion is lossy by language contract")]
fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        other => unreachable!("non-numeric operand {} in float promotion", other.type_name()),
    }
}

/// Integer arithmetic is checked: overflow, division by zero and modulo
/// by zero are runtime errors, never wraps or panics. Division truncates
/// toward zero.
fn int_binary(l: i64, r: i64, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => l
            .checked_add(r)
            .map(Value::int)
            .ok_or_else(|| integer_overflow("+")),
        BinaryOp::Sub => l
            .checked_sub(r)
            .map(Value::int)
            .ok_or_else(|| integer_overflow("-")),
        BinaryOp::Mul => l
            .checked_mul(r)
            .map(Value::int)
            .ok_or_else(|| integer_overflow("*")),
        BinaryOp::Div => {
            if r == 0 {
                return Err(division_by_zero());
            }
            l.checked_div(r)
                .map(Value::int)
                .ok_or_else(|| integer_overflow("/"))
        }
        BinaryOp::Mod => {
            if r == 0 {
                return Err(modulo_by_zero());
            }
            l.checked_rem(r)
                .map(Value::int)
                .ok_or_else(|| integer_overflow("%"))
        }
        BinaryOp::Lt => Ok(Value::Bool(l < r)),
        BinaryOp::Gt => Ok(Value::Bool(l > r)),
        BinaryOp::LtEq => Ok(Value::Bool(l <= r)),
        BinaryOp::GtEq => Ok(Value::Bool(l >= r)),
        BinaryOp::Eq => Ok(Value::Bool(l == r)),
        BinaryOp::NotEq => Ok(Value::Bool(l != r)),
        BinaryOp::And | BinaryOp::Or => Err(unknown_infix_op("INTEGER", op, "INTEGER")),
    }
}

/// Float arithmetic follows IEEE semantics; `x / 0.0` is an infinity,
/// not an error.
fn float_binary(l: f64, r: f64, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::float(l + r)),
        BinaryOp::Sub => Ok(Value::float(l - r)),
        BinaryOp::Mul => Ok(Value::float(l * r)),
        BinaryOp::Div => Ok(Value::float(l / r)),
        BinaryOp::Mod => Ok(Value::float(l % r)),
        BinaryOp::Lt => Ok(Value::Bool(l < r)),
        BinaryOp::Gt => Ok(Value::Bool(l > r)),
        BinaryOp::LtEq => Ok(Value::Bool(l <= r)),
        BinaryOp::GtEq => Ok(Value::Bool(l >= r)),
        BinaryOp::Eq => Ok(Value::Bool(l == r)),
        BinaryOp::NotEq => Ok(Value::Bool(l != r)),
        BinaryOp::And | BinaryOp::Or => Err(unknown_infix_op("FLOAT", op, "FLOAT")),
    }
}

/// Exact decimal arithmetic.
fn decimal_binary(l: &BigDecimal, r: &BigDecimal, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::decimal(l + r)),
        BinaryOp::Sub => Ok(Value::decimal(l - r)),
        BinaryOp::Mul => Ok(Value::decimal(l * r)),
        BinaryOp::Div => {
            if r.is_zero() {
                return Err(division_by_zero());
            }
            Ok(Value::decimal(l / r))
        }
        BinaryOp::Mod => {
            if r.is_zero() {
                return Err(modulo_by_zero());
            }
            Ok(Value::decimal(l % r))
        }
        BinaryOp::Lt => Ok(Value::Bool(l < r)),
        BinaryOp::Gt => Ok(Value::Bool(l > r)),
        BinaryOp::LtEq => Ok(Value::Bool(l <= r)),
        BinaryOp::GtEq => Ok(Value::Bool(l >= r)),
        BinaryOp::Eq => Ok(Value::Bool(l == r)),
        BinaryOp::NotEq => Ok(Value::Bool(l != r)),
        BinaryOp::And | BinaryOp::Or => Err(unknown_infix_op("DECIMAL", op, "DECIMAL")),
    }
}

/// Identity comparison for the equality fallthrough: composites compare
/// by handle, everything else is unequal (the typed arms above already
/// handled value equality).
fn identical(l: &Value, r: &Value) -> bool {
    match (l, r) {
        (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
        (Value::Hash(a), Value::Hash(b)) => a.ptr_eq(b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
        _ => false,
    }
}
