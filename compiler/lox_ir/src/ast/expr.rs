//! Expression nodes.

use std::{fmt, mem};

use lox_stack::ensure_sufficient_stack;

use super::{BinaryOp, UnaryOp};
use crate::Position;

/// An expression with the position of its leading (or operator) token.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr { kind, position }
    }

    /// Create an expression at the start of the source, for tests.
    pub fn dummy(kind: ExprKind) -> Self {
        Expr::new(kind, Position::START)
    }
}

/// Expression variants.
///
/// `Assign` exists in the model for the later assignment grammar; the parser
/// does not produce it.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Bool(bool),
    Nil,
    Number(f64),
    Str(String),
    Variable(String),
    Assign {
        name: String,
        value: Box<Expr>,
    },
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl ExprKind {
    /// Replace `self` with `Nil`, pushing any boxed children onto `out`.
    fn detach_children(&mut self, out: &mut Vec<Box<Expr>>) {
        match mem::replace(self, ExprKind::Nil) {
            ExprKind::Assign { value: child, .. }
            | ExprKind::Grouping(child)
            | ExprKind::Unary { operand: child, .. } => out.push(child),
            ExprKind::Binary { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            ExprKind::Bool(_)
            | ExprKind::Nil
            | ExprKind::Number(_)
            | ExprKind::Str(_)
            | ExprKind::Variable(_) => {}
        }
    }
}

/// Tear the tree down through a heap worklist so that dropping a deeply
/// nested expression uses constant native stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.kind.detach_children(&mut pending);
        }
    }
}

/// Fully parenthesized rendering, used when inspecting parser output.
///
/// `2 / 4 + 1` renders as `(+ (/ 2 4) 1)`; groupings render as `(group ...)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match &self.kind {
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Nil => f.write_str("nil"),
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::Str(s) => write!(f, "\"{s}\""),
            ExprKind::Variable(name) => f.write_str(name),
            ExprKind::Assign { name, value } => write!(f, "(= {name} {value})"),
            ExprKind::Grouping(inner) => write!(f, "(group {inner})"),
            ExprKind::Unary { op, operand } => write!(f, "({op} {operand})"),
            ExprKind::Binary { op, left, right } => write!(f, "({op} {left} {right})"),
        })
    }
}
