//! Evaluator test suite.
//!
//! End-to-end tests drive the lexer and parser (dev-dependencies) so
//! programs read as source text.

mod operators;

use rill_ir::{SharedArena, SharedInterner};
use rill_object::{EvalError, EvalResult, Scope, Value};

use crate::{buffer_handler, scripted_reader, silent_handler, Interpreter};

/// Evaluate a source program with silent I/O.
fn eval_source(source: &str) -> EvalResult {
    let interner = SharedInterner::new();
    let outcome = rill_parse::parse_source(source, &interner);
    assert!(
        outcome.errors.is_empty(),
        "parse errors in {source:?}: {:?}",
        outcome.errors
    );
    let interp = Interpreter::with_io(
        interner,
        SharedArena::new(outcome.arena),
        silent_handler(),
        scripted_reader(Vec::new()),
    );
    interp.eval_program(&outcome.program, &Scope::root())
}

/// Evaluate and unwrap the value.
fn eval_ok(source: &str) -> Value {
    match eval_source(source) {
        Ok(value) => value,
        Err(e) => panic!("evaluation of {source:?} failed: {e}"),
    }
}

/// Evaluate and unwrap the error.
fn eval_err(source: &str) -> EvalError {
    match eval_source(source) {
        Ok(value) => panic!("evaluation of {source:?} unexpectedly produced {value:?}"),
        Err(e) => e,
    }
}

/// Evaluate with a capturing print handler and scripted input lines.
/// Returns the result and everything the program printed.
fn eval_with_io(source: &str, input_lines: &[&str]) -> (EvalResult, String) {
    let interner = SharedInterner::new();
    let outcome = rill_parse::parse_source(source, &interner);
    assert!(
        outcome.errors.is_empty(),
        "parse errors in {source:?}: {:?}",
        outcome.errors
    );

    let print = buffer_handler();
    let reader = scripted_reader(input_lines.iter().map(|s| s.to_string()).collect());
    let interp = Interpreter::with_io(
        interner,
        SharedArena::new(outcome.arena),
        print.clone(),
        reader,
    );
    let result = interp.eval_program(&outcome.program, &Scope::root());
    (result, print.get_output())
}
