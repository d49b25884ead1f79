//! Unit tests for the pure operator functions.

use pretty_assertions::assert_eq;
use rill_ir::{BinaryOp, UnaryOp};
use rill_object::Value;

use crate::{evaluate_binary, evaluate_unary};

#[test]
fn int_operations() {
    assert_eq!(
        evaluate_binary(Value::int(2), Value::int(3), BinaryOp::Add),
        Ok(Value::int(5))
    );
    assert_eq!(
        evaluate_binary(Value::int(5), Value::int(3), BinaryOp::Sub),
        Ok(Value::int(2))
    );
    assert_eq!(
        evaluate_binary(Value::int(2), Value::int(3), BinaryOp::Mul),
        Ok(Value::int(6))
    );
    assert_eq!(
        evaluate_binary(Value::int(7), Value::int(2), BinaryOp::Div),
        Ok(Value::int(3))
    );
    assert_eq!(
        evaluate_binary(Value::int(7), Value::int(2), BinaryOp::Mod),
        Ok(Value::int(1))
    );
}

#[test]
fn division_by_zero_errors() {
    assert!(evaluate_binary(Value::int(1), Value::int(0), BinaryOp::Div).is_err());
    assert!(evaluate_binary(Value::int(1), Value::int(0), BinaryOp::Mod).is_err());
}

#[test]
fn overflow_is_checked() {
    assert_eq!(
        evaluate_binary(Value::int(i64::MAX), Value::int(1), BinaryOp::Add)
            .unwrap_err()
            .message,
        "integer overflow in +"
    );
    assert_eq!(
        evaluate_binary(Value::int(i64::MIN), Value::int(-1), BinaryOp::Div)
            .unwrap_err()
            .message,
        "integer overflow in /"
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, Value::int(i64::MIN))
            .unwrap_err()
            .message,
        "integer overflow in -"
    );
}

#[test]
fn comparisons() {
    assert_eq!(
        evaluate_binary(Value::int(2), Value::int(3), BinaryOp::Lt),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(Value::int(3), Value::int(3), BinaryOp::GtEq),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(Value::float(1.5), Value::int(2), BinaryOp::Lt),
        Ok(Value::Bool(true))
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(
        evaluate_binary(Value::string("hello"), Value::string(" world"), BinaryOp::Add),
        Ok(Value::string("hello world"))
    );
}

#[test]
fn type_mismatch_and_unknown_operator() {
    assert_eq!(
        evaluate_binary(Value::int(1), Value::Bool(true), BinaryOp::Add)
            .unwrap_err()
            .message,
        "type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
        evaluate_binary(Value::Bool(true), Value::Bool(false), BinaryOp::Add)
            .unwrap_err()
            .message,
        "unknown operator: BOOLEAN + BOOLEAN"
    );
    assert_eq!(
        evaluate_binary(Value::array(vec![]), Value::array(vec![]), BinaryOp::Add)
            .unwrap_err()
            .message,
        "unknown operator: ARRAY + ARRAY"
    );
}

#[test]
fn array_equality_is_identity_at_the_operator_level() {
    let a = Value::array(vec![Value::int(1)]);
    let b = a.clone();
    assert_eq!(
        evaluate_binary(a.clone(), b, BinaryOp::Eq),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(a, Value::array(vec![Value::int(1)]), BinaryOp::Eq),
        Ok(Value::Bool(false))
    );
}

#[test]
fn unary_negation() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, Value::int(5)), Ok(Value::int(-5)));
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, Value::float(1.5)),
        Ok(Value::float(-1.5))
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, Value::string("x"))
            .unwrap_err()
            .message,
        "unknown operator: -STRING"
    );
}

#[test]
fn unary_not_uses_truthiness() {
    assert_eq!(
        evaluate_unary(UnaryOp::Not, Value::Bool(true)),
        Ok(Value::Bool(false))
    );
    assert_eq!(evaluate_unary(UnaryOp::Not, Value::Null), Ok(Value::Bool(true)));
    assert_eq!(evaluate_unary(UnaryOp::Not, Value::int(0)), Ok(Value::Bool(false)));
}
