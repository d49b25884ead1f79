//! Prefix (expression-start) grammar rules.

use rill_ir::{Expr, ExprId, ExprKind, Name, TokenKind, UnaryOp};

use crate::precedence::Precedence;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Dispatch on the current token to build the left operand.
    ///
    /// A token with no expression-start rule is a recoverable error: the
    /// error is recorded, the token consumed, and an `ExprKind::Error`
    /// placeholder returned so the enclosing statement can continue.
    pub(crate) fn parse_prefix(&mut self) -> Result<ExprId, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Int(value) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Int(value), span)))
            }
            TokenKind::Float(value) => {
                self.cursor.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Float(value), span)))
            }
            TokenKind::Str(value) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Str(value), span)))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Bool(true), span)))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Bool(false), span)))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Ident(name), span)))
            }
            TokenKind::Bang => self.parse_unary(UnaryOp::Not),
            TokenKind::Minus => self.parse_unary(UnaryOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => self.parse_function(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_hash(),
            other => {
                self.errors
                    .push(ParseError::no_prefix_rule(other.display_name(), span));
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Error, span)))
            }
        }
    }

    /// `!<operand>` / `-<operand>`
    fn parse_unary(&mut self, op: UnaryOp) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let operand = self.parse_expression(Precedence::Prefix)?;
        let span = start.merge(self.arena.expr(operand).span);

        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Prefix { op, operand }, span)))
    }

    /// `(<expr>)` - grouping changes nothing but the climb order.
    fn parse_grouped(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if (<condition>) { <consequence> }` with optional `else { ... }`.
    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        self.cursor.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(&TokenKind::RParen)?;

        let consequence = self.parse_block()?;

        let alternative = if self.cursor.check(&TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::If {
                condition,
                consequence,
                alternative,
            },
            span,
        )))
    }

    /// `fn(<params>,*) { <body> }`
    fn parse_function(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        self.cursor.expect(&TokenKind::LParen)?;
        let params = self.parse_parameter_list()?;
        self.cursor.expect(&TokenKind::RParen)?;

        let body = self.parse_block()?;
        let span = start.merge(self.cursor.previous_span());

        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Function { params, body }, span)))
    }

    /// Comma-separated parameter names up to (not consuming) `)`.
    fn parse_parameter_list(&mut self) -> Result<Vec<Name>, ParseError> {
        let mut params = Vec::new();
        if self.cursor.check(&TokenKind::RParen) {
            return Ok(params);
        }

        params.push(self.cursor.expect_ident()?.0);
        while self.cursor.check(&TokenKind::Comma) {
            self.cursor.advance();
            if self.cursor.check(&TokenKind::RParen) {
                break;
            }
            params.push(self.cursor.expect_ident()?.0);
        }

        Ok(params)
    }

    /// `[<elements>,*]`
    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let elements = self.parse_expression_series(&TokenKind::RBracket)?;
        let close = self.cursor.expect(&TokenKind::RBracket)?;

        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Array(elements),
            start.merge(close.span),
        )))
    }

    /// `{<key>: <value>,*}`
    fn parse_hash(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let mut pairs = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            let key = self.parse_expression(Precedence::Lowest)?;
            self.cursor.expect(&TokenKind::Colon)?;
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.check(&TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }
        let close = self.cursor.expect(&TokenKind::RBrace)?;

        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Hash(pairs),
            start.merge(close.span),
        )))
    }
}
