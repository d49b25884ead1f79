//! Tree-walking interpreter for Rill.
//!
//! One recursive dispatch over statements and expressions against a
//! [`SharedScope`] chain. Block statements short-circuit through `?`, so
//! a `return` signal or an error produced by any sub-evaluation
//! propagates unchanged until a function-call boundary (or the top-level
//! program) handles it.
//!
//! # Arena threading
//!
//! Expression ids are only valid against the arena that produced them. A
//! function value carries its defining arena, so when a call crosses
//! parse boundaries (a closure from an earlier REPL line), the body is
//! evaluated through an interpreter borrowing the callee's arena.

mod registry;

pub use registry::BuiltinRegistry;

use rustc_hash::FxHashMap;
use tracing::trace;

use rill_ir::{BlockId, ExprId, ExprKind, Name, Program, SharedArena, SharedInterner, Span, Stmt};
use rill_object::{
    identifier_not_found, index_not_supported, malformed_expression, not_a_function,
    unusable_hash_key, wrong_arg_count, BuiltinDef, BuiltinImpl, ControlFlow, EvalError,
    EvalResult, FunctionValue, HashKey, HashPair, IoBuiltin, SharedScope, Value,
};

use crate::line_reader::{stdin_reader, SharedLineReader};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{evaluate_binary, evaluate_unary};

/// The evaluator.
///
/// Cheap to construct per program; the interner, I/O handlers and a
/// persistent [`SharedScope`] carry state across programs in a session.
pub struct Interpreter {
    interner: SharedInterner,
    arena: SharedArena,
    builtins: BuiltinRegistry,
    print: SharedPrintHandler,
    reader: SharedLineReader,
}

impl Interpreter {
    /// Create an interpreter with default process I/O.
    pub fn new(interner: SharedInterner, arena: SharedArena) -> Self {
        Self::with_io(interner, arena, stdout_handler(), stdin_reader())
    }

    /// Create an interpreter with explicit I/O handlers.
    pub fn with_io(
        interner: SharedInterner,
        arena: SharedArena,
        print: SharedPrintHandler,
        reader: SharedLineReader,
    ) -> Self {
        let builtins = BuiltinRegistry::new(&interner);
        Interpreter {
            interner,
            arena,
            builtins,
            print,
            reader,
        }
    }

    /// The interner this interpreter resolves names against.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Same session, different arena: used to evaluate the body of a
    /// function that was defined under another parse.
    fn with_arena(&self, arena: SharedArena) -> Interpreter {
        Interpreter {
            interner: self.interner.clone(),
            arena,
            builtins: self.builtins.clone(),
            print: self.print.clone(),
            reader: self.reader.clone(),
        }
    }

    /// Evaluate a program against a scope.
    ///
    /// The result is the value of the last statement. A top-level
    /// `return` yields its operand; errors abort the remaining
    /// statements.
    pub fn eval_program(&self, program: &Program, scope: &SharedScope) -> EvalResult {
        trace!(statements = program.statements.len(), "eval program");

        let mut result = Value::Null;
        for stmt in &program.statements {
            match self.eval_statement(stmt, scope) {
                Ok(value) => result = value,
                Err(signal) => {
                    return match signal.control_flow {
                        Some(ControlFlow::Return(value)) => Ok(value),
                        None => Err(signal),
                    };
                }
            }
        }
        Ok(result)
    }

    fn eval_statement(&self, stmt: &Stmt, scope: &SharedScope) -> EvalResult {
        match stmt {
            Stmt::Let { name, value, .. } => {
                // Errors propagate before anything is bound.
                let value = self.eval_expr(*value, scope)?;
                scope.define(*name, value);
                Ok(Value::Null)
            }
            Stmt::Return { value, .. } => {
                let value = self.eval_expr(*value, scope)?;
                Err(EvalError::return_with(value))
            }
            Stmt::Expr { value, .. } => self.eval_expr(*value, scope),
        }
    }

    /// Evaluate a block; its value is the value of the last statement.
    /// `?` short-circuits the remaining statements on a return signal or
    /// error.
    fn eval_block(&self, id: BlockId, scope: &SharedScope) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &self.arena.block(id).statements {
            result = self.eval_statement(stmt, scope)?;
        }
        Ok(result)
    }

    fn eval_expr(&self, id: ExprId, scope: &SharedScope) -> EvalResult {
        let expr = self.arena.expr(id);
        let span = expr.span;
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::int(*n)),
            ExprKind::Float(f) => Ok(Value::float(*f)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(s) => Ok(Value::string(self.interner.lookup(*s))),

            ExprKind::Ident(name) => self.resolve_identifier(*name, scope, span),

            ExprKind::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(*element, scope)?);
                }
                Ok(Value::array(values))
            }

            ExprKind::Hash(pairs) => self.eval_hash_literal(pairs, scope, span),

            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(*operand, scope)?;
                evaluate_unary(*op, operand).map_err(|e| e.with_span(span))
            }

            ExprKind::Infix { op, left, right } => {
                use rill_ir::BinaryOp;
                match op {
                    // Short-circuit on the left operand's truthiness; the
                    // right side is not evaluated at all.
                    BinaryOp::And => {
                        let left = self.eval_expr(*left, scope)?;
                        if !left.is_truthy() {
                            return Ok(Value::Bool(false));
                        }
                        let right = self.eval_expr(*right, scope)?;
                        Ok(Value::Bool(right.is_truthy()))
                    }
                    BinaryOp::Or => {
                        let left = self.eval_expr(*left, scope)?;
                        if left.is_truthy() {
                            return Ok(Value::Bool(true));
                        }
                        let right = self.eval_expr(*right, scope)?;
                        Ok(Value::Bool(right.is_truthy()))
                    }
                    _ => {
                        let left = self.eval_expr(*left, scope)?;
                        let right = self.eval_expr(*right, scope)?;
                        evaluate_binary(left, right, *op).map_err(|e| e.with_span(span))
                    }
                }
            }

            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expr(*condition, scope)?;
                // The chosen arm runs in a child scope: block-local
                // bindings don't leak outward.
                if condition.is_truthy() {
                    self.eval_block(*consequence, &scope.child())
                } else if let Some(alternative) = alternative {
                    self.eval_block(*alternative, &scope.child())
                } else {
                    Ok(Value::Null)
                }
            }

            ExprKind::Function { params, body } => Ok(Value::function(
                params.clone(),
                *body,
                self.arena.clone(),
                scope.clone(),
            )),

            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(*callee, scope)?;
                // Arguments evaluate left to right; the first error
                // aborts the rest.
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(*arg, scope)?);
                }
                self.eval_call(callee, values, span)
            }

            ExprKind::Index { target, index } => {
                let target = self.eval_expr(*target, scope)?;
                let index = self.eval_expr(*index, scope)?;
                eval_index(target, index).map_err(|e| e.with_span(span))
            }

            ExprKind::Error => Err(malformed_expression().with_span(span)),
        }
    }

    /// Scope chain first, then the builtin table.
    fn resolve_identifier(&self, name: Name, scope: &SharedScope, span: Span) -> EvalResult {
        if let Some(value) = scope.lookup(name) {
            return Ok(value);
        }
        if let Some(def) = self.builtins.resolve(name) {
            return Ok(Value::Builtin(def));
        }
        Err(identifier_not_found(self.interner.lookup(name)).with_span(span))
    }

    fn eval_hash_literal(
        &self,
        pairs: &[(ExprId, ExprId)],
        scope: &SharedScope,
        span: Span,
    ) -> EvalResult {
        let mut map = FxHashMap::default();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(*key_expr, scope)?;
            let Some(hash_key) = HashKey::try_from_value(&key) else {
                return Err(unusable_hash_key(key.type_name()).with_span(span));
            };
            let value = self.eval_expr(*value_expr, scope)?;
            map.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::hash(map))
    }

    /// Dispatch a call to a user function or a builtin.
    fn eval_call(&self, callee: Value, args: Vec<Value>, span: Span) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(&func, args, span),
            Value::Builtin(def) => self.call_builtin(def, &args).map_err(|e| e.with_span(span)),
            other => Err(not_a_function(other.type_name()).with_span(span)),
        }
    }

    fn call_function(&self, func: &FunctionValue, args: Vec<Value>, span: Span) -> EvalResult {
        if args.len() != func.params.len() {
            return Err(wrong_arg_count(func.params.len(), args.len()).with_span(span));
        }

        // Fresh scope under the *captured* scope: free variables resolve
        // against the definition site, not the call site.
        let call_scope = func.scope.child();
        for (param, arg) in func.params.iter().zip(args) {
            call_scope.define(*param, arg);
        }

        let result = if func.arena.ptr_eq(&self.arena) {
            self.eval_block(func.body, &call_scope)
        } else {
            // Closure from another parse: its body ids resolve against
            // its own arena.
            self.with_arena(func.arena.clone())
                .eval_block(func.body, &call_scope)
        };

        // The call boundary unwraps the return signal; errors keep
        // propagating.
        match result {
            Err(signal) => match signal.control_flow {
                Some(ControlFlow::Return(value)) => Ok(value),
                None => Err(signal),
            },
            ok => ok,
        }
    }

    fn call_builtin(&self, def: &'static BuiltinDef, args: &[Value]) -> EvalResult {
        trace!(builtin = def.name, argc = args.len(), "call builtin");
        match &def.imp {
            BuiltinImpl::Pure(func) => func(args),
            BuiltinImpl::Io(IoBuiltin::Logs) => self.builtin_logs(args),
            BuiltinImpl::Io(IoBuiltin::Input) => self.builtin_input(args),
        }
    }

    /// `logs(...)`: one line per argument, strings single-quoted.
    fn builtin_logs(&self, args: &[Value]) -> EvalResult {
        for arg in args {
            match arg {
                Value::Str(s) => self.print.println(&format!("'{}'", &**s)),
                other => self.print.println(&other.inspect(&self.interner)),
            }
        }
        Ok(Value::Null)
    }

    /// `input()` / `input(prompt)`: optional prompt, then one line.
    fn builtin_input(&self, args: &[Value]) -> EvalResult {
        if args.len() > 1 {
            return Err(EvalError::new(format!(
                "wrong number of arguments passed to input(). got={}",
                args.len()
            )));
        }
        if let Some(prompt) = args.first() {
            self.print.println(&prompt.inspect(&self.interner));
        }
        Ok(Value::string(self.reader.read_line()))
    }
}

/// Index access.
///
/// Array indices must be integers; out-of-range (negative included) is
/// `null`, never an error. Hash lookups require a hashable key; a missing
/// key is `null`.
fn eval_index(target: Value, index: Value) -> EvalResult {
    match (target, index) {
        (Value::Array(elements), Value::Int(i)) => {
            let elements = elements.borrow();
            let value = usize::try_from(i)
                .ok()
                .and_then(|idx| elements.get(idx).cloned());
            Ok(value.unwrap_or(Value::Null))
        }
        (Value::Hash(pairs), key) => match HashKey::try_from_value(&key) {
            Some(hash_key) => Ok(pairs
                .borrow()
                .get(&hash_key)
                .map_or(Value::Null, |pair| pair.value.clone())),
            None => Err(unusable_hash_key(key.type_name())),
        },
        (target, _) => Err(index_not_supported(target.type_name())),
    }
}
