//! Expression grammar: precedence climbing and infix/postfix forms.

use rill_ir::{BinaryOp, Expr, ExprId, ExprKind, TokenKind};

use crate::precedence::Precedence;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression with the climbing loop.
    ///
    /// Builds the left operand from a prefix rule, then folds in infix and
    /// postfix forms while the current token binds tighter than `min`.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Result<ExprId, ParseError> {
        let mut left = self.parse_prefix()?;

        while Precedence::of(&self.cursor.current_kind()) > min {
            left = match self.cursor.current_kind() {
                TokenKind::LParen => self.parse_call(left)?,
                TokenKind::LBracket => self.parse_index(left)?,
                _ => match Self::match_binary_op(&self.cursor.current_kind()) {
                    Some(op) => self.parse_binary(left, op)?,
                    // Precedence::of returned > Lowest, so the token is
                    // one of the forms above.
                    None => break,
                },
            };
        }

        Ok(left)
    }

    /// Map an infix operator token to its `BinaryOp`.
    pub(crate) fn match_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::AndAnd => Some(BinaryOp::And),
            TokenKind::OrOr => Some(BinaryOp::Or),
            _ => None,
        }
    }

    /// `<left> <op> <right>` - left-associative: the right side is parsed
    /// at the operator's own precedence, so an equal-strength operator
    /// stops the climb.
    fn parse_binary(&mut self, left: ExprId, op: BinaryOp) -> Result<ExprId, ParseError> {
        let prec = Precedence::of(&self.cursor.current_kind());
        self.cursor.advance();

        let right = self.parse_expression(prec)?;
        let span = self
            .arena
            .expr(left)
            .span
            .merge(self.arena.expr(right).span);

        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Infix { op, left, right }, span)))
    }

    /// `<callee>(<args>,*)`
    fn parse_call(&mut self, callee: ExprId) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let args = self.parse_expression_series(&TokenKind::RParen)?;
        let close = self.cursor.expect(&TokenKind::RParen)?;
        let span = self.arena.expr(callee).span.merge(close.span);

        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { callee, args }, span)))
    }

    /// `<target>[<index>]`
    fn parse_index(&mut self, target: ExprId) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        let close = self.cursor.expect(&TokenKind::RBracket)?;
        let span = self.arena.expr(target).span.merge(close.span);

        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Index { target, index }, span)))
    }

    /// Comma-separated expressions up to (not consuming) `terminator`.
    ///
    /// A trailing comma before the terminator is allowed.
    pub(crate) fn parse_expression_series(
        &mut self,
        terminator: &TokenKind,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.check(terminator) {
            return Ok(items);
        }

        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.check(&TokenKind::Comma) {
            self.cursor.advance();
            if self.cursor.check(terminator) {
                break;
            }
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        Ok(items)
    }
}
