//! Lexical error type.

use std::fmt;

use rill_ir::Span;

/// An error produced while scanning source text.
///
/// Lex errors never abort the scan; the lexer emits an `Illegal` token for
/// the offending span and keeps going.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    /// Human-readable message.
    pub message: String,
    /// Location of the offending input.
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LexError {}
