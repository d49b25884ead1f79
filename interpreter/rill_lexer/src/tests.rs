use pretty_assertions::assert_eq;
use rill_ir::{StringInterner, TokenKind};

use super::lex;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    let (tokens, errors) = lex(source, &interner);
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_let_statement() {
    let interner = StringInterner::new();
    let (tokens, errors) = lex("let five = 5;", &interner);
    assert!(errors.is_empty());

    let expected = [
        TokenKind::Let,
        TokenKind::Ident(interner.intern("five")),
        TokenKind::Assign,
        TokenKind::Int(5),
        TokenKind::Semicolon,
        TokenKind::Eof,
    ];
    let actual: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(actual, expected);
}

#[test]
fn lexes_operators_and_delimiters() {
    let actual = kinds("= + - * / % ! < > <= >= == != && || , ; : ( ) { } [ ]");
    let expected = [
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Bang,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Eof,
    ];
    assert_eq!(actual, expected);
}

#[test]
fn lexes_keywords() {
    let actual = kinds("let return fn if else true false");
    let expected = [
        TokenKind::Let,
        TokenKind::Return,
        TokenKind::Fn,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Eof,
    ];
    assert_eq!(actual, expected);
}

#[test]
fn float_wins_over_int() {
    assert_eq!(
        kinds("3.14 10"),
        [TokenKind::Float(3.14), TokenKind::Int(10), TokenKind::Eof]
    );
}

#[test]
fn string_literal_is_unescaped_and_interned() {
    let interner = StringInterner::new();
    let (tokens, errors) = lex(r#""a\tb\n""#, &interner);
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Str(interner.intern("a\tb\n")));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(
        kinds("// heading\n1 // trailing\n+ 2"),
        [
            TokenKind::Int(1),
            TokenKind::Plus,
            TokenKind::Int(2),
            TokenKind::Eof
        ]
    );
}

#[test]
fn unrecognized_input_becomes_illegal_token() {
    let interner = StringInterner::new();
    let (tokens, errors) = lex("let @ = 1;", &interner);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unrecognized token"));
    assert!(tokens
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Illegal(_))));
}

#[test]
fn oversized_integer_reports_error() {
    let interner = StringInterner::new();
    let (_, errors) = lex("99999999999999999999", &interner);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("out of range"));
}

#[test]
fn spans_track_byte_offsets() {
    let interner = StringInterner::new();
    let (tokens, _) = lex("let x", &interner);
    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 3));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (4, 5));
}
