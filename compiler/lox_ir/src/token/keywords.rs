//! Reserved-word resolution.
//!
//! The table is a `match`, so it is static, immutable, and needs no
//! initialization. Length-bucketing rejects most identifiers before any
//! string comparison.

use super::TokenKind;

/// Resolve an identifier lexeme.
///
/// Returns the keyword kind on an exact, case-sensitive match and
/// `TokenKind::Identifier` otherwise.
#[inline]
pub fn lookup(lexeme: &str) -> TokenKind {
    let kind = match lexeme.len() {
        2 => match lexeme {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match lexeme {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match lexeme {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match lexeme {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match lexeme {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    };
    kind.unwrap_or(TokenKind::Identifier)
}
