//! Operator binding strengths for precedence climbing.

use rill_ir::TokenKind;

/// Binding strength, weakest first.
///
/// The derived `Ord` gives the comparison the climbing loop relies on:
/// parsing continues while the current operator binds tighter than the
/// caller's minimum.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub(crate) enum Precedence {
    Lowest,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `==` `!=`
    Equality,
    /// `<` `>` `<=` `>=`
    Comparison,
    /// `+` `-`
    Additive,
    /// `*` `/` `%`
    Multiplicative,
    /// Prefix `!` `-`
    Prefix,
    /// `callee(args)`
    Call,
    /// `target[index]`
    Index,
}

impl Precedence {
    /// Binding strength of a token in infix position.
    ///
    /// Non-operator tokens (including `;`, `)`, `Eof`) report `Lowest`,
    /// which terminates the climbing loop.
    pub(crate) fn of(kind: &TokenKind) -> Precedence {
        match kind {
            TokenKind::OrOr => Precedence::Or,
            TokenKind::AndAnd => Precedence::And,
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equality,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::Comparison
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Multiplicative,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}
