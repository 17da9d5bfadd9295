//! Statement nodes.

use std::fmt;

use super::Expr;
use crate::Position;

/// A statement with the position of its first token.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }
}

/// Statement variants, in program order once parsed.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Evaluate and discard.
    Expression(Expr),
    /// Evaluate and write the value's text form plus a newline.
    Print(Expr),
    /// Bind `name`; a missing initializer binds `nil`.
    Var {
        name: String,
        initializer: Option<Expr>,
    },
}

impl StmtKind {
    /// Variant name, for logging a statement without rendering its tree.
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Expression(_) => "expression",
            StmtKind::Print(_) => "print",
            StmtKind::Var { .. } => "var",
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Expression(expr) => write!(f, "{expr};"),
            StmtKind::Print(expr) => write!(f, "(print {expr});"),
            StmtKind::Var {
                name,
                initializer: Some(init),
            } => write!(f, "(var {name} {init});"),
            StmtKind::Var {
                name,
                initializer: None,
            } => write!(f, "(var {name});"),
        }
    }
}
