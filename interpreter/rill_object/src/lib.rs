//! Rill Object - runtime values for the Rill interpreter.
//!
//! This crate owns everything the evaluator manipulates at run time:
//!
//! - [`Value`]: the closed tagged union of runtime values
//! - [`Heap`] / [`Shared`]: reference-counted ownership wrappers
//!   (immutable sharing vs. shared in-place mutation)
//! - [`Scope`] / [`SharedScope`]: the lexical environment chain that
//!   closures capture by handle
//! - [`EvalError`] / [`EvalResult`]: the error channel, which doubles as
//!   the carrier for the `return` control-flow signal
//! - [`BUILTINS`]: the fixed native function table
//!
//! The interpreter is single-threaded by contract, so `Rc` is the
//! ownership primitive throughout.

mod builtins;
mod errors;
mod hash_key;
mod heap;
mod scope;
mod value;

pub use builtins::{
    float_to_decimal, lookup_builtin, BuiltinDef, BuiltinImpl, IoBuiltin, PureBuiltin, BUILTINS,
};
pub use errors::{
    division_by_zero, identifier_not_found, index_not_supported, integer_overflow,
    malformed_expression, modulo_by_zero, not_a_function, type_mismatch, unknown_infix_op,
    unknown_prefix_op, unusable_hash_key, wrong_arg_count, ControlFlow, EvalError, EvalErrorKind,
    EvalResult,
};
pub use hash_key::{HashKey, HashPair};
pub use heap::{Heap, Shared};
pub use scope::{Scope, SharedScope};
pub use value::{FunctionValue, Value};
