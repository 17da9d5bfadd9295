//! Parse error types.
//!
//! A [`ParseError`] is the offending token plus a [`ParseErrorKind`]
//! describing what the parser wanted there. Scanner problems arrive as
//! `Illegal` tokens and are reported here as [`ParseErrorKind::IllegalToken`].

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Token, TokenKind};
use thiserror::Error;

/// Why the scanner produced an `Illegal` token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IllegalTokenReason {
    UnterminatedString,
    MalformedNumber,
    UnexpectedCharacter,
}

impl IllegalTokenReason {
    /// Recover the reason from the lexeme the scanner attached.
    pub fn classify(lexeme: &str) -> Self {
        match lexeme.as_bytes().first() {
            Some(b'"') => IllegalTokenReason::UnterminatedString,
            Some(b) if b.is_ascii_digit() => IllegalTokenReason::MalformedNumber,
            _ => IllegalTokenReason::UnexpectedCharacter,
        }
    }

    pub fn code(self) -> ErrorCode {
        match self {
            IllegalTokenReason::UnterminatedString => ErrorCode::E0001,
            IllegalTokenReason::UnexpectedCharacter => ErrorCode::E0002,
            IllegalTokenReason::MalformedNumber => ErrorCode::E0003,
        }
    }
}

impl fmt::Display for IllegalTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalTokenReason::UnterminatedString => "unterminated string",
            IllegalTokenReason::MalformedNumber => "malformed number",
            IllegalTokenReason::UnexpectedCharacter => "unexpected character",
        })
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Input ended where `expected` was required.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    /// A specific token was required, e.g. `;` or `)`.
    #[error("expected `{}` {context}, found {found}", .expected.display_name())]
    ExpectedToken {
        expected: TokenKind,
        context: &'static str,
        found: String,
    },

    #[error("expected variable name, found {found}")]
    ExpectedIdentifier { found: String },

    /// The token cannot start a primary expression.
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },

    #[error("{reason} `{lexeme}`")]
    IllegalToken {
        lexeme: String,
        reason: IllegalTokenReason,
    },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1005,
            ParseErrorKind::ExpectedToken {
                expected: TokenKind::RightParen,
                ..
            } => ErrorCode::E1003,
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::IllegalToken { reason, .. } => reason.code(),
        }
    }
}

/// A syntax error at a specific token.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The token the parser was looking at when it gave up.
    pub token: Token,
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.kind.to_string()).at(self.token.position)
    }
}

/// What the parser was looking for, used to build errors at the current
/// token.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Expectation {
    /// A specific token, with a phrase like "after expression".
    Token(TokenKind, &'static str),
    Identifier,
    Expression,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Token(kind, context) => {
                write!(f, "`{}` {context}", kind.display_name())
            }
            Expectation::Identifier => f.write_str("variable name"),
            Expectation::Expression => f.write_str("expression"),
        }
    }
}

impl ParseError {
    /// Build the error for finding `token` where `expected` was required.
    ///
    /// `Illegal` and `Eof` tokens take precedence over the expectation: the
    /// scanner problem or the early end is the more useful report.
    #[cold]
    pub(crate) fn unexpected(token: Token, expected: Expectation) -> Self {
        let kind = match token.kind {
            TokenKind::Illegal => {
                let lexeme = token.lexeme().unwrap_or_default().to_owned();
                let reason = IllegalTokenReason::classify(&lexeme);
                ParseErrorKind::IllegalToken { lexeme, reason }
            }
            TokenKind::Eof => ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            _ => {
                let found = token.describe();
                match expected {
                    Expectation::Token(kind, context) => ParseErrorKind::ExpectedToken {
                        expected: kind,
                        context,
                        found,
                    },
                    Expectation::Identifier => ParseErrorKind::ExpectedIdentifier { found },
                    Expectation::Expression => ParseErrorKind::ExpectedExpression { found },
                }
            }
        };
        ParseError { kind, token }
    }
}
