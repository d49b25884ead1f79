//! Statement and block grammar.

mod expr;
mod primary;

use rill_ir::{Block, BlockId, Stmt, TokenKind};

use crate::precedence::Precedence;
use crate::{recovery, ParseError, Parser};

impl Parser<'_> {
    /// Parse a single statement, dispatching on the current token.
    ///
    /// Statements are terminated by `;`; the terminator is optional before
    /// `}` and end of input.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Assign)?;

        let value = self.parse_expression(Precedence::Lowest)?;
        let end = self.eat_terminator();

        Ok(Stmt::Let {
            name,
            value,
            span: start.merge(end),
        })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        let end = self.eat_terminator();

        Ok(Stmt::Return {
            value,
            span: start.merge(end),
        })
    }

    /// Bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let value = self.parse_expression(Precedence::Lowest)?;
        let end = self.eat_terminator();

        Ok(Stmt::Expr {
            value,
            span: start.merge(end),
        })
    }

    /// Consume an optional `;` and return the span parsing ended at.
    fn eat_terminator(&mut self) -> rill_ir::Span {
        if self.cursor.check(&TokenKind::Semicolon) {
            self.cursor.advance().span
        } else {
            self.cursor.previous_span()
        }
    }

    /// Parse a braced statement block: `{ <stmt>* }`.
    ///
    /// A failed statement inside the block is recorded and recovery
    /// continues within the block, so one bad statement doesn't take the
    /// rest of the block with it.
    pub(crate) fn parse_block(&mut self) -> Result<BlockId, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;

        let mut block = Block::default();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => block.statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    recovery::synchronize(&mut self.cursor);
                }
            }
        }
        self.cursor.expect(&TokenKind::RBrace)?;

        Ok(self.arena.alloc_block(block))
    }
}
