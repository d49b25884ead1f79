//! Rill IR - token, span and AST types for the Rill interpreter.
//!
//! This crate is the shared vocabulary of the pipeline: the lexer produces
//! [`Token`]s, the parser allocates [`Expr`] nodes into an [`ExprArena`],
//! and the evaluator walks the arena by [`ExprId`].
//!
//! Identifiers and string literals are interned through [`StringInterner`]
//! into compact [`Name`] ids shared by every phase.

mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, BlockId, Expr, ExprArena, ExprId, ExprKind, Program, SharedArena, Stmt,
    UnaryOp,
};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind, TokenList};
