//! Parse error type.

use std::fmt;

use rill_ir::Span;

/// A parse error with its source location.
///
/// Errors are accumulated on the parser and reported as a batch after the
/// full parse attempt; a single broken statement never aborts the parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// Error for a token with no expression-start rule.
    #[cold]
    pub fn no_prefix_rule(kind_name: &str, span: Span) -> Self {
        ParseError::new(
            format!("no prefix parse function for {kind_name} found"),
            span,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
