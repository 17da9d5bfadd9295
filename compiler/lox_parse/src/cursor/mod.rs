//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, and consumption. The cursor never moves
//! past the final `Eof` token.

use lox_ir::{Position, Token, TokenKind};
use tracing::trace;

/// Cursor over a token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Returned once `pos` runs off the slice, so a stream missing its
    /// `Eof` still terminates.
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_position = tokens.last().map_or(Position::START, |t| t.position);
        Cursor {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::Eof, eof_position),
        }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches `kind`, without consuming it.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Check if the current token matches any of `kinds`, without consuming it.
    pub fn match_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` this returns `Eof` again and does not move.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            trace!(kind = ?token.kind, pos = self.pos, "advance");
            self.pos += 1;
        }
        token
    }

    /// Index of the current token in the stream.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests;
