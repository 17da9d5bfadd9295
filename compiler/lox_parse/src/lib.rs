//! Recursive descent parser for Lox.
//!
//! Consumes the token stream produced by `lox_lexer` and builds a list of
//! statements. One token of lookahead, no backtracking.
//!
//! The first syntax error stops the parse. Statements completed before the
//! error are still returned in [`ParseOutput::statements`] so callers can
//! inspect how far the parser got.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

pub use error::{IllegalTokenReason, ParseError, ParseErrorKind};

use cursor::Cursor;
use lox_ir::{Stmt, Token};

/// Result of parsing a token stream.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    /// Statements parsed before the first error (all of them on success).
    pub statements: Vec<Stmt>,
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }

    /// The statements, or the syntax error that stopped the parse.
    pub fn into_result(self) -> Result<Vec<Stmt>, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.statements),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`.
    ///
    /// The stream is expected to end with `Eof`, as `lox_lexer::scan`
    /// guarantees. A stream without one behaves as if it had one.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program → declaration* EOF`
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            match self.parse_declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    tracing::debug!(
                        parsed = statements.len(),
                        token_index = self.cursor.position(),
                        code = %error.code(),
                        "parse stopped at first error"
                    );
                    return ParseOutput {
                        statements,
                        error: Some(error),
                    };
                }
            }
        }
        ParseOutput {
            statements,
            error: None,
        }
    }
}

/// Parse a token stream into statements.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_program()
}
