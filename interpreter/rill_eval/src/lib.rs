//! Rill Eval - tree-walking evaluator for the Rill interpreter.
//!
//! A single recursive dispatch over the AST against a [`SharedScope`]
//! chain. Control flow (`return`) and runtime errors travel on the `Err`
//! channel of [`EvalResult`] and are unwrapped at call and program
//! boundaries; see `rill_object::errors`.
//!
//! # Architecture
//!
//! - [`Interpreter`]: owns the interner, the arena of the program being
//!   evaluated, the builtin registry and the process I/O handlers
//! - [`evaluate_binary`] / [`evaluate_unary`]: pure operator semantics
//!   with the numeric promotion tower (int -> decimal -> float)
//! - [`BuiltinRegistry`]: name-interned index over the static builtin
//!   table
//! - Print handler / line reader: enum-dispatch I/O fronts so `logs` and
//!   `input` are scriptable in tests

mod interpreter;
mod line_reader;
mod operators;
mod print_handler;
mod unary_operators;

pub use interpreter::{BuiltinRegistry, Interpreter};
pub use line_reader::{
    scripted_reader, stdin_reader, BufferLineReader, LineReaderImpl, SharedLineReader,
    StdinLineReader,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;

// Re-export the value types alongside the evaluator for convenience.
pub use rill_object::{
    ControlFlow, EvalError, EvalResult, FunctionValue, HashKey, HashPair, Scope, SharedScope,
    Value,
};

#[cfg(test)]
mod tests;
