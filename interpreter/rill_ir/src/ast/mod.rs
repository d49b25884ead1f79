//! AST types for Rill programs.
//!
//! Expressions are stored flat in an [`ExprArena`] and addressed by
//! [`ExprId`]; statement blocks live in the same arena behind [`BlockId`].
//! Nodes are immutable once allocated - the evaluator only reads them.

mod arena;
mod expr;
mod operators;

pub use arena::{BlockId, ExprArena, ExprId, SharedArena};
pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};

use super::{Name, Span};

/// A parsed program: an ordered sequence of top-level statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }
}

/// Statement node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let name = value;`
    Let {
        name: Name,
        value: ExprId,
        span: Span,
    },
    /// `return value;`
    Return { value: ExprId, span: Span },
    /// Bare expression statement.
    Expr { value: ExprId, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let { span, .. } | Stmt::Return { span, .. } | Stmt::Expr { span, .. } => *span,
        }
    }
}

/// A braced sequence of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}
