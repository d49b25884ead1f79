//! Lexer for Rill using logos with string interning.
//!
//! [`lex`] scans the whole source in one pass and produces a [`TokenList`]
//! (always terminated by `Eof`) plus any [`LexError`]s encountered.
//! Unrecognized input becomes an `Illegal` token so the parser still sees
//! the full stream; callers report the error list alongside parse errors.

mod lex_error;

pub use lex_error::LexError;

use logos::Logos;
use rill_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos (before cooking and interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace; statements end at `;`, not newline
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("let")]
    Let,
    #[token("return")]
    Return,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Float before Int so `3.14` is not scanned as `3` `.` `14`
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    Str,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex source code into a token list plus accumulated errors.
pub fn lex(source: &str, interner: &StringInterner) -> (TokenList, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(raw) => {
                let kind = convert_token(raw, slice, interner);
                tokens.push(Token::new(kind, span));
            }
            Err(()) => {
                errors.push(LexError::new(describe_invalid(slice), span));
                tokens.push(Token::new(
                    TokenKind::Illegal(interner.intern(slice)),
                    span,
                ));
            }
        }
    }

    (TokenList::new(tokens), errors)
}

/// Convert a raw token to a `TokenKind`, interning identifier and string
/// payloads.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // Literals
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f),
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            let unescaped = unescape_string(content);
            TokenKind::Str(interner.intern(&unescaped))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::Let => TokenKind::Let,
        RawToken::Return => TokenKind::Return,
        RawToken::Fn => TokenKind::Fn,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        // Operators
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,

        // Delimiters
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,

        RawToken::LineComment => unreachable!("comments are filtered before conversion"),
    }
}

/// Resolve escape sequences in a string literal body.
///
/// Unknown escapes keep the escaped character (`\q` -> `q`).
fn unescape_string(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

/// Error message for input logos could not match.
fn describe_invalid(slice: &str) -> String {
    if slice.starts_with('"') {
        "unterminated string literal".to_string()
    } else if slice.chars().all(|c| c.is_ascii_digit()) {
        format!("integer literal out of range: {slice}")
    } else {
        format!("unrecognized token: {slice:?}")
    }
}

#[cfg(test)]
mod tests;
