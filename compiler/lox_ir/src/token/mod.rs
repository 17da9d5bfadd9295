//! Token types for the Lox scanner.
//!
//! A token is a lexical category plus an optional literal payload and the
//! position of its first byte. Tokens are immutable once produced.

mod keywords;
mod kind;

pub use keywords::lookup;
pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// Literal payload attached to a token.
///
/// Identifiers and illegal tokens carry their lexeme as `Str`; string tokens
/// carry the raw text between the quotes; number tokens carry the parsed value.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Str(String),
    Number(f64),
}

impl Literal {
    /// Returns the string payload, if this is a `Str` literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    /// Returns the numeric payload, if this is a `Number` literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Str(_) => None,
        }
    }
}

/// A token with its literal payload and source position.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            literal: None,
            position,
        }
    }

    #[inline]
    pub fn with_literal(kind: TokenKind, literal: Literal, position: Position) -> Self {
        Token {
            kind,
            literal: Some(literal),
            position,
        }
    }

    /// Create a token at the start of the source, for tests and generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(kind, Position::START)
    }

    /// The string payload, if any.
    pub fn lexeme(&self) -> Option<&str> {
        self.literal.as_ref().and_then(Literal::as_str)
    }

    /// How this token is named in diagnostics.
    ///
    /// Tokens with a payload show the payload (`` `count` ``, `` `"hi"` ``,
    /// `` `1.5` ``); everything else falls back to the kind's display name.
    pub fn describe(&self) -> String {
        match (&self.kind, &self.literal) {
            (TokenKind::String, Some(Literal::Str(s))) => format!("`\"{s}\"`"),
            (_, Some(Literal::Str(s))) => format!("`{s}`"),
            (_, Some(Literal::Number(n))) => format!("`{n}`"),
            (TokenKind::Eof, None) => TokenKind::Eof.display_name().to_string(),
            (kind, None) => format!("`{}`", kind.display_name()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(lit) => write!(f, "{:?}({:?}) @ {}", self.kind, lit, self.position),
            None => write!(f, "{:?} @ {}", self.kind, self.position),
        }
    }
}

#[cfg(test)]
mod tests;
