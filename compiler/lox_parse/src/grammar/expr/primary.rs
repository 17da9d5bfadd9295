//! Primary expressions: literals, variables, and groupings.

use lox_ir::{Expr, ExprKind, Literal, TokenKind};
use tracing::trace;

use crate::error::{Expectation, ParseError};
use crate::Parser;

impl Parser<'_> {
    /// ```text
    /// primary → NUMBER | STRING | "true" | "false" | "nil"
    ///         | IDENTIFIER | "(" expression ")"
    /// ```
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let kind = match self.cursor.current_kind() {
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::Number => {
                let value = self
                    .cursor
                    .current()
                    .literal
                    .as_ref()
                    .and_then(Literal::as_number)
                    .unwrap_or_default();
                ExprKind::Number(value)
            }
            TokenKind::String => {
                ExprKind::Str(self.cursor.current().lexeme().unwrap_or_default().to_owned())
            }
            TokenKind::Identifier => {
                ExprKind::Variable(self.cursor.current().lexeme().unwrap_or_default().to_owned())
            }
            TokenKind::LeftParen => return self.parse_grouping(),
            _ => return Err(self.error_at_current(Expectation::Expression)),
        };
        let token = self.cursor.advance();
        trace!(kind = ?token.kind, "primary");
        Ok(Expr::new(kind, token.position))
    }

    /// `"(" expression ")"`, positioned at the opening paren.
    fn parse_grouping(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        let inner = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "after expression")?;
        Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), open.position))
    }
}
