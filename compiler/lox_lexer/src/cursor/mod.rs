//! Byte cursor with line/column tracking.
//!
//! `current()` returns `0x00` once the cursor has reached the end of the
//! source. Interior null bytes also read as `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to tell them apart.

use lox_ir::Position;

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a [u8],
    /// Current read position (byte index into `src`).
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a [u8]) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Byte at the current position, or `0x00` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.src.get(self.pos).copied().unwrap_or(0)
    }

    /// Byte one position ahead of current, or `0x00` past end of input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.src.get(self.pos + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte index of the current position.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source position of the current byte.
    pub(crate) fn position(&self) -> Position {
        let offset = u32::try_from(self.pos).unwrap_or(u32::MAX);
        Position::new(offset, self.line, self.column)
    }

    /// Move past the current byte. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.src[self.pos] == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consumed) or end of input.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        self.eat_while(|b| b != b'\n');
    }

    /// Bytes from `start` up to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.src[start..self.pos]
    }
}
