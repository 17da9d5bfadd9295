//! Operator tables and matching helpers.
//!
//! Each precedence level is the set of token kinds that continue it. The
//! helpers peek at the current token through `Cursor::match_any` and report
//! the operator it would start. Nothing is consumed.

use lox_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

pub(crate) const EQUALITY: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];

pub(crate) const COMPARISON: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];

pub(crate) const TERM: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];

pub(crate) const FACTOR: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

const UNARY: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus];

impl Parser<'_> {
    /// The binary operator at the cursor, if its kind is one of `level`.
    pub(crate) fn match_binary_op(&self, level: &[TokenKind]) -> Option<BinaryOp> {
        if !self.cursor.match_any(level) {
            return None;
        }
        match self.cursor.current_kind() {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        if !self.cursor.match_any(UNARY) {
            return None;
        }
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
