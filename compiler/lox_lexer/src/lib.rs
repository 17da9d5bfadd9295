//! Scanner for Lox.
//!
//! Turns source bytes into a `Vec<Token>` terminated by exactly one
//! `TokenKind::Eof`. Scanning never fails: unrecognized characters,
//! unterminated strings and malformed numbers become `TokenKind::Illegal`
//! tokens carrying the offending lexeme, and the parser reports them.

mod cursor;
mod scanner;

pub use scanner::Scanner;

use lox_ir::Token;

/// Scan `source` into tokens.
///
/// The returned vector is never empty; its last element is the only
/// end-of-input token.
pub fn scan(source: &[u8]) -> Vec<Token> {
    let tokens: Vec<Token> = Scanner::new(source).collect();
    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "scanned source");
    tokens
}
