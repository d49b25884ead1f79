//! Recursive descent parser for Rill.
//!
//! Expressions are parsed by precedence climbing: a prefix rule keyed by
//! the current token kind builds the left operand, then infix rules fold
//! in operators while their binding strength exceeds the caller's minimum.
//!
//! Errors are accumulated, never thrown: a broken statement is abandoned,
//! the cursor synchronizes to the next statement boundary, and parsing
//! continues. Callers must check [`ParseOutcome::errors`] before
//! evaluating the program.

mod cursor;
mod error;
mod grammar;
mod precedence;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;

use rill_ir::{ExprArena, Program, StringInterner, TokenList};

/// Result of a full parse attempt.
///
/// A syntactically broken program still yields a best-effort [`Program`];
/// `errors` is non-empty in that case.
#[derive(Debug)]
pub struct ParseOutcome {
    pub program: Program,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    /// True if the parse produced no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream into a program.
    pub fn parse_program(mut self) -> ParseOutcome {
        let mut program = Program::new();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => program.statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    recovery::synchronize(&mut self.cursor);
                }
            }
        }

        tracing::trace!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parse complete"
        );

        ParseOutcome {
            program,
            arena: self.arena,
            errors: self.errors,
        }
    }
}

/// Convenience entry point: lex and parse in one call.
///
/// Lex errors are folded into the outcome's error list so callers have a
/// single list to check.
pub fn parse_source(source: &str, interner: &StringInterner) -> ParseOutcome {
    let (tokens, lex_errors) = rill_lexer::lex(source, interner);
    let mut outcome = Parser::new(&tokens, interner).parse_program();
    let mut errors: Vec<ParseError> = lex_errors
        .into_iter()
        .map(|e| ParseError::new(e.message, e.span))
        .collect();
    errors.append(&mut outcome.errors);
    outcome.errors = errors;
    outcome
}

#[cfg(test)]
mod tests;
