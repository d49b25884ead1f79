//! Error recovery for the parser.
//!
//! After a statement fails, the cursor skips ahead to the next statement
//! boundary so the remaining statements still get a parse attempt.

use rill_ir::TokenKind;

use super::cursor::Cursor;

/// Skip tokens until just past a `;`, or until a token that can start (or
/// close) a statement.
///
/// Every statement parser consumes at least one token before it can fail,
/// so stopping at `let`/`return` cannot re-enter the failed position.
pub(crate) fn synchronize(cursor: &mut Cursor) {
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::Semicolon => {
                cursor.advance();
                return;
            }
            TokenKind::Let | TokenKind::Return | TokenKind::RBrace => return,
            _ => {
                cursor.advance();
            }
        }
    }
}

