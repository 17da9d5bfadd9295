//! Grammar productions.
//!
//! ```text
//! declaration  → varDecl | statement
//! varDecl      → "var" IDENTIFIER ( "=" expression )? ";"
//! statement    → printStmt | exprStmt
//! printStmt    → "print" expression ";"
//! exprStmt     → expression ";"
//! ```
//!
//! Expressions live in [`expr`].

mod expr;

use lox_ir::{Stmt, StmtKind, Token, TokenKind};

use crate::error::{Expectation, ParseError};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.check(TokenKind::Var) {
            self.parse_var_decl()
        } else {
            self.parse_statement()
        }
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let var = self.cursor.advance();

        if !self.cursor.check(TokenKind::Identifier) {
            return Err(self.error_at_current(Expectation::Identifier));
        }
        let name = self
            .cursor
            .advance()
            .lexeme()
            .unwrap_or_default()
            .to_owned();

        let initializer = if self.cursor.check(TokenKind::Equal) {
            self.cursor.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon, "after variable declaration")?;
        Ok(Stmt::new(StmtKind::Var { name, initializer }, var.position))
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.check(TokenKind::Print) {
            let print = self.cursor.advance();
            let value = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "after value")?;
            return Ok(Stmt::new(StmtKind::Print(value), print.position));
        }

        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "after expression")?;
        let position = expr.position;
        Ok(Stmt::new(StmtKind::Expression(expr), position))
    }

    /// Consume a token of `kind` or fail naming what it should follow.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        context: &'static str,
    ) -> Result<Token, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance())
        } else {
            Err(self.error_at_current(Expectation::Token(kind, context)))
        }
    }

    #[cold]
    pub(crate) fn error_at_current(&self, expected: Expectation) -> ParseError {
        ParseError::unexpected(self.cursor.current().clone(), expected)
    }
}
