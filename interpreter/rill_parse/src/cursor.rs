//! Token cursor for navigating the token stream.
//!
//! Provides the parser's view of the tokens: the current token plus one
//! token of lookahead. The cursor never rewinds.

use rill_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use super::ParseError;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token.
    ///
    /// Invariant: the position is always valid; the last token is `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        debug_assert!(self.pos < self.tokens.len(), "cursor position out of bounds");
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Peek at the next token's kind (one-token lookahead).
    /// Returns `Eof` at the end of the stream.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind (payloads ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// The trailing `Eof` is never consumed: grammar rules check the
    /// current kind before advancing, so the cursor cannot run off the end.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos];
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Expect the current token to be of the given kind, advance and
    /// return it. On mismatch, records nothing and does not advance; the
    /// returned error carries the canonical expectation message.
    ///
    /// Split into an inline happy path and a `#[cold]` error constructor
    /// so the `format!()` allocation stays off the fast path.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    /// Build the error for a failed `expect()` call.
    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: &TokenKind) -> ParseError {
        ParseError::new(
            format!(
                "Expected next token to be '{}', got '{}' instead",
                kind.display_name(),
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }

    /// Expect and consume an identifier, returning its interned name and
    /// span.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.current_span();
            self.advance();
            Ok((name, span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    /// Build the error for a failed `expect_ident()` call.
    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            format!(
                "Expected next token to be 'IDENT', got '{}' instead",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }
}
