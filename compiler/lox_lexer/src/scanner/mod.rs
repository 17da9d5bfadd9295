//! Hand-written scanner producing [`Token`]s.
//!
//! Single left-to-right pass over a [`Cursor`]. Whitespace and `//` comments
//! are skipped before each token. Errors are encoded as `Illegal` tokens,
//! never as `Result::Err`, so the caller always gets an EOF-terminated stream.
//!
//! # Design
//!
//! Main dispatch is on the first byte of the lexeme. Each arm calls a focused
//! method that advances the cursor and builds the token.

use lox_ir::{lookup, Literal, Position, Token, TokenKind};

use crate::cursor::Cursor;

/// Scanner over a byte slice.
///
/// Use [`next_token`](Scanner::next_token) to pull tokens one at a time, or
/// iterate: the iterator yields the `Eof` token once and then ends.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Set once the iterator has yielded `Eof`.
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` when the source is exhausted. Subsequent calls keep
    /// returning `Eof` at the same position without advancing.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.cursor.pos();
        let position = self.cursor.position();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Token::new(TokenKind::Eof, position),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, position),
            b'0'..=b'9' => self.number(start, position),
            b'"' => self.string(start, position),
            b'(' => self.single(position, TokenKind::LeftParen),
            b')' => self.single(position, TokenKind::RightParen),
            b'{' => self.single(position, TokenKind::LeftBrace),
            b'}' => self.single(position, TokenKind::RightBrace),
            b',' => self.single(position, TokenKind::Comma),
            b'.' => self.single(position, TokenKind::Dot),
            b'-' => self.single(position, TokenKind::Minus),
            b'+' => self.single(position, TokenKind::Plus),
            b';' => self.single(position, TokenKind::Semicolon),
            b'*' => self.single(position, TokenKind::Star),
            // `//` was consumed as a comment by skip_trivia.
            b'/' => self.single(position, TokenKind::Slash),
            b'!' => self.one_or_two(position, TokenKind::Bang, TokenKind::BangEqual),
            b'=' => self.one_or_two(position, TokenKind::Equal, TokenKind::EqualEqual),
            b'<' => self.one_or_two(position, TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.one_or_two(position, TokenKind::Greater, TokenKind::GreaterEqual),
            _ => self.illegal(start, position),
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'/' if self.cursor.peek() == b'/' => self.cursor.eat_until_newline_or_eof(),
                _ => return,
            }
        }
    }

    // ─── Punctuation & Operators ───────────────────────────────────

    #[inline]
    fn single(&mut self, position: Position, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, position)
    }

    /// `x` or `x=`: `!`, `=`, `<`, `>` each take a trailing `=`.
    fn one_or_two(&mut self, position: Position, one: TokenKind, two: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            Token::new(two, position)
        } else {
            Token::new(one, position)
        }
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self, start: usize, position: Position) -> Token {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let lexeme = self.lexeme_from(start);
        match lookup(&lexeme) {
            TokenKind::Identifier => {
                Token::with_literal(TokenKind::Identifier, Literal::Str(lexeme), position)
            }
            keyword => Token::new(keyword, position),
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Maximal run of digits and dots, parsed as `f64`.
    ///
    /// `1.2.3` is consumed whole and fails to parse, producing one `Illegal`
    /// token rather than a number followed by stray punctuation.
    fn number(&mut self, start: usize, position: Position) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        let lexeme = self.lexeme_from(start);
        match lexeme.parse::<f64>() {
            Ok(value) => Token::with_literal(TokenKind::Number, Literal::Number(value), position),
            Err(_) => Token::with_literal(TokenKind::Illegal, Literal::Str(lexeme), position),
        }
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// `"..."` with no escape processing.
    ///
    /// A newline or end of input before the closing quote yields `Illegal`
    /// carrying everything consumed so far, opening quote included. The
    /// newline itself is left for `skip_trivia`.
    fn string(&mut self, start: usize, position: Position) -> Token {
        self.cursor.advance(); // opening '"'
        let content_start = self.cursor.pos();
        loop {
            if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                let lexeme = self.lexeme_from(start);
                return Token::with_literal(TokenKind::Illegal, Literal::Str(lexeme), position);
            }
            if self.cursor.current() == b'"' {
                break;
            }
            self.cursor.advance();
        }
        let content = self.lexeme_from(content_start);
        self.cursor.advance(); // closing '"'
        Token::with_literal(TokenKind::String, Literal::Str(content), position)
    }

    // ─── Errors ────────────────────────────────────────────────────

    /// One unrecognized character.
    ///
    /// A UTF-8 lead byte swallows its continuation bytes so a single
    /// non-ASCII character yields a single token.
    fn illegal(&mut self, start: usize, position: Position) -> Token {
        let lead = self.cursor.current();
        self.cursor.advance();
        if lead >= 0xC0 {
            self.cursor.eat_while(|b| (0x80..0xC0).contains(&b));
        }
        let lexeme = self.lexeme_from(start);
        Token::with_literal(TokenKind::Illegal, Literal::Str(lexeme), position)
    }

    fn lexeme_from(&self, start: usize) -> String {
        String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}
