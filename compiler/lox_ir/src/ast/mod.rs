//! Syntax tree for Lox.
//!
//! Two closed node sets: expressions and statements. Each node carries the
//! position of the token that introduced it (the operator for unary and
//! binary nodes) so runtime errors can point back at source.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
